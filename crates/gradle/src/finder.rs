use anyhow::Result;
use buildstamp_core::{AppIdentity, Config};
use std::path::{Path, PathBuf};

use crate::build_script::{BuildScript, GradleBuildScript};

const BUILD_SCRIPT_FILES: [&str; 2] = ["build.gradle.kts", "build.gradle"];

/// Locate the module's build script: the configured file if set, else the Kotlin script, else
/// the Groovy one.
#[must_use]
pub fn find_build_script(module_dir: &Path, config: &Config) -> Option<PathBuf> {
    if let Some(configured) = &config.build_script {
        let path = module_dir.join(configured);
        return path.is_file().then_some(path);
    }
    BUILD_SCRIPT_FILES
        .iter()
        .map(|file| module_dir.join(file))
        .find(|path| path.is_file())
}

/// # Errors
/// Returns error if a build script exists but cannot be read.
pub async fn load_build_script(
    module_dir: &Path,
    config: &Config,
) -> Result<Option<Box<dyn BuildScript>>> {
    match find_build_script(module_dir, config) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "found build script");
            Ok(Some(Box::new(GradleBuildScript::load(&path).await?)))
        }
        None => {
            tracing::debug!(module_dir = %module_dir.display(), "no build script found");
            Ok(None)
        }
    }
}

/// Application id and debug suffix from the build script, falling back to the configured
/// default id and an empty suffix.
#[must_use]
pub fn resolve_app_identity(script: Option<&dyn BuildScript>, config: &Config) -> AppIdentity {
    let application_id = script
        .and_then(|s| s.application_id())
        .unwrap_or_else(|| config.default_application_id.clone());
    let debug_suffix = script
        .and_then(|s| s.application_id_suffix(&config.debug_build_type))
        .unwrap_or_default();
    AppIdentity::new(application_id, debug_suffix)
}
