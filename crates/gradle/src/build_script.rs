use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::{read_to_string, write};

use crate::{
    declarations::{ScriptSyntax, find_application_id, find_application_id_suffix},
    version_updater::{update_version_in_groovy, update_version_in_kts},
};

/// A module build script buildstamp can read identity from and write versions into.
#[async_trait]
pub trait BuildScript: std::fmt::Debug + Send + Sync {
    fn path(&self) -> &Path;
    fn syntax(&self) -> ScriptSyntax;
    fn application_id(&self) -> Option<String>;
    fn application_id_suffix(&self, build_type: &str) -> Option<String>;

    /// Rewrite `versionCode` and `versionName` in the script on disk.
    async fn apply_version(&mut self, version_code: u32, version_name: &str) -> Result<bool>;
}

#[derive(Debug)]
pub struct GradleBuildScript {
    path: PathBuf,
    syntax: ScriptSyntax,
    content: String,
}

impl GradleBuildScript {
    #[must_use]
    pub fn new(path: PathBuf, content: String) -> Self {
        let syntax = ScriptSyntax::from_file_name(
            path.file_name()
                .and_then(|f| f.to_str())
                .unwrap_or_default(),
        );
        Self {
            path,
            syntax,
            content,
        }
    }

    /// # Errors
    /// Returns error if the script cannot be read.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = read_to_string(path)
            .await
            .with_context(|| format!("Failed to read build script {}", path.display()))?;
        Ok(Self::new(path.to_path_buf(), content))
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

#[async_trait]
impl BuildScript for GradleBuildScript {
    fn path(&self) -> &Path {
        &self.path
    }

    fn syntax(&self) -> ScriptSyntax {
        self.syntax
    }

    fn application_id(&self) -> Option<String> {
        find_application_id(&self.content, self.syntax)
    }

    fn application_id_suffix(&self, build_type: &str) -> Option<String> {
        find_application_id_suffix(&self.content, build_type, self.syntax)
    }

    async fn apply_version(&mut self, version_code: u32, version_name: &str) -> Result<bool> {
        let updated = match self.syntax {
            ScriptSyntax::Kotlin => update_version_in_kts(&self.content, version_code, version_name),
            ScriptSyntax::Groovy => {
                update_version_in_groovy(&self.content, version_code, version_name)
            }
        };
        if updated == self.content {
            tracing::debug!(path = %self.path.display(), "build script already up to date");
            return Ok(false);
        }
        write(&self.path, &updated).await?;
        self.content = updated;
        tracing::debug!(path = %self.path.display(), version_code, version_name, "updated build script");
        Ok(true)
    }
}
