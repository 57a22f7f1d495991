//! # buildstamp-core
//!
//! Core types shared by the buildstamp crates: the configuration, the properties-backed version
//! store, task classification, derived build versions and release signing configs.

pub mod build_version;
pub mod config;
pub mod error;
pub mod properties;
pub mod signing_config;
pub mod task_selection;
pub mod version_store;

pub use build_version::{AppIdentity, BuildVersion};
pub use config::Config;
pub use error::{SigningError, StoreError};
pub use properties::Properties;
pub use signing_config::{SigningConfig, SigningOutcome};
pub use task_selection::{TaskKind, TaskPatterns, TaskSelection, task_segment};
pub use version_store::{VersionCounters, VersionStore};
