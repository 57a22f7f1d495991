use std::path::Path;

use anyhow::Result;
use buildstamp_core::VersionStore;

use crate::{properties_file::display_file_name, read_properties, write_properties};

const STORE_COMMENT: &str = "Build Properties";

/// # Errors
/// Returns error if the store file is unreadable or a counter is missing or malformed.
pub async fn read_version_store(path: &Path) -> Result<VersionStore> {
    let properties = read_properties(path).await?;
    let store = VersionStore::from_properties(&display_file_name(path), properties)?;
    tracing::debug!(path = %path.display(), counters = ?store.counters(), "read version store");
    Ok(store)
}

/// # Errors
/// Returns error if the store file cannot be written.
pub async fn write_version_store(path: &Path, store: &VersionStore) -> Result<()> {
    write_properties(path, store.properties(), STORE_COMMENT).await
}
