use anyhow::{Context, Result};
use buildstamp_core::Config;
use buildstamp_utils::get_buildstamp_config;
use std::path::{Path, PathBuf};

/// Module directory and configuration shared by every command.
pub struct CommandContext {
    pub module_dir: PathBuf,
    pub config: Config,
}

impl CommandContext {
    /// # Errors
    /// Returns error if the module directory does not exist or its configuration is invalid.
    pub async fn new(dir: Option<&Path>) -> Result<Self> {
        let module_dir = match dir {
            Some(dir) => dir.to_path_buf(),
            None => Self::current_dir()?,
        };
        if !module_dir.is_dir() {
            anyhow::bail!("Module directory not found: {}", module_dir.display());
        }
        let config = get_buildstamp_config(&module_dir)
            .await
            .context("Failed to load buildstamp configuration")?;
        tracing::debug!(module_dir = %module_dir.display(), "command context ready");

        Ok(Self { module_dir, config })
    }

    /// # Errors
    /// Returns error if retrieving the current directory fails.
    pub fn current_dir() -> Result<PathBuf> {
        Ok(std::env::current_dir()?)
    }

    #[must_use]
    pub fn version_store_path(&self) -> PathBuf {
        self.module_dir.join(&self.config.properties_file)
    }
}
