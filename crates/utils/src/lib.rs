mod derive_version;
mod get_buildstamp_config;
mod get_project_name;
mod is_non_stable;
mod properties_codec;
mod properties_file;
mod resolve_signing_config;
mod version_store_file;

pub use derive_version::derive_version;
pub use get_buildstamp_config::{CONFIG_FILE, get_buildstamp_config, get_buildstamp_config_path};
pub use get_project_name::get_project_name;
pub use is_non_stable::is_non_stable;
pub use properties_codec::{parse_properties, store_properties};
pub use properties_file::{read_properties, write_properties};
pub use resolve_signing_config::{RELEASE_SIGNING_CONFIG, resolve_signing_config};
pub use version_store_file::{read_version_store, write_version_store};
