mod config;
mod init;
mod signing;
mod stability;
mod stamp;

pub use config::ConfigArgs;
pub use config::handle_config;
pub use init::InitArgs;
pub use init::handle_init;
pub use signing::SigningArgs;
pub use signing::handle_signing;
pub use stability::StabilityArgs;
pub use stability::handle_stability;
pub use stamp::StampArgs;
pub use stamp::handle_stamp;
