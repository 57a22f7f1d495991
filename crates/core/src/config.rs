use serde::{Deserialize, Serialize};

/// Loaded from `buildstamp.json` in the module directory, controls file names, task patterns
/// and build-type names.
///
/// Every field is optional in the file; missing fields take the defaults used by a standard
/// Android application module.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Version store file, relative to the module directory
    #[serde(default = "default_properties_file")]
    pub properties_file: String,

    /// Release keystore properties file, relative to the module directory
    #[serde(default = "default_keystore_file")]
    pub keystore_file: String,

    /// Gradle build script, relative to the module directory (auto-detected when unset)
    #[serde(default)]
    pub build_script: Option<String>,

    /// Pattern a task name must fully match to count as a release task
    #[serde(default = "default_release_pattern")]
    pub release_pattern: String,

    /// Pattern a task name must fully match to count as a test task
    #[serde(default = "default_test_pattern")]
    pub test_pattern: String,

    /// Application id used when the build script does not declare one
    #[serde(default = "default_application_id")]
    pub default_application_id: String,

    /// Build type whose `applicationIdSuffix` is appended to non-release builds
    #[serde(default = "default_debug_build_type")]
    pub debug_build_type: String,

    /// Build type the release signing config is attached to
    #[serde(default = "default_release_build_type")]
    pub release_build_type: String,
}

fn default_properties_file() -> String {
    "build.properties".to_string()
}

fn default_keystore_file() -> String {
    "androidkeystore.properties".to_string()
}

fn default_release_pattern() -> String {
    ".*Release$".to_string()
}

fn default_test_pattern() -> String {
    ".*Test$".to_string()
}

fn default_application_id() -> String {
    "com.example.app".to_string()
}

fn default_debug_build_type() -> String {
    "debug".to_string()
}

fn default_release_build_type() -> String {
    "release".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            properties_file: default_properties_file(),
            keystore_file: default_keystore_file(),
            build_script: None,
            release_pattern: default_release_pattern(),
            test_pattern: default_test_pattern(),
            default_application_id: default_application_id(),
            debug_build_type: default_debug_build_type(),
            release_build_type: default_release_build_type(),
        }
    }
}
