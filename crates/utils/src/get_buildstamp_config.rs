use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use buildstamp_core::Config;
use tokio::fs::read_to_string;

pub const CONFIG_FILE: &str = "buildstamp.json";

#[must_use]
pub fn get_buildstamp_config_path(module_dir: &Path) -> PathBuf {
    module_dir.join(CONFIG_FILE)
}

/// Load `buildstamp.json` from the module directory, falling back to defaults when absent.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub async fn get_buildstamp_config(module_dir: &Path) -> Result<Config> {
    let path = get_buildstamp_config_path(module_dir);
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let content = read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}
