use std::fmt::Display;

use colored::Colorize;
use serde::Serialize;

use crate::VersionCounters;

/// Application identity as declared by the module's build script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppIdentity {
    /// `defaultConfig.applicationId`
    pub application_id: String,
    /// `applicationIdSuffix` of the debug build type, empty when undeclared
    pub debug_suffix: String,
}

impl AppIdentity {
    #[must_use]
    pub fn new(application_id: impl Into<String>, debug_suffix: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            debug_suffix: debug_suffix.into(),
        }
    }
}

/// Version attributes derived for one build invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildVersion {
    /// Root project name, taken from the module directory's parent
    pub project_name: Option<String>,
    pub version_name: String,
    pub version_code: u32,
    pub application_id: String,
    pub release: bool,
    pub test: bool,
    /// Counters after derivation
    pub counters: VersionCounters,
    /// Whether the derivation changed the persisted counters
    pub store_changed: bool,
}

impl Display for BuildVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({}) {}",
            self.project_name.as_deref().unwrap_or("unknown").bold(),
            self.version_name.bright_green(),
            self.version_code,
            self.application_id.cyan()
        )
    }
}
