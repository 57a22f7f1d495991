use std::path::Path;

use anyhow::{Context, Result};
use buildstamp_core::{Properties, StoreError};
use chrono::Local;
use tokio::fs::{read_to_string, write};

use crate::{parse_properties, store_properties};

/// Read a properties file.
///
/// # Errors
/// Returns [`StoreError::Unreadable`] if the file does not exist or cannot be read, or an error
/// naming the file if its content is malformed.
pub async fn read_properties(path: &Path) -> Result<Properties> {
    let file_name = display_file_name(path);
    if !path.is_file() {
        tracing::error!(path = %path.display(), "properties file not found");
        return Err(StoreError::Unreadable(file_name).into());
    }
    let content = read_to_string(path).await.map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "failed to read properties file");
        StoreError::Unreadable(file_name.clone())
    })?;
    parse_properties(&content).with_context(|| format!("Invalid properties file {file_name}"))
}

/// Overwrite a properties file with a header comment and the current local time.
///
/// # Errors
/// Returns error if the file cannot be written.
pub async fn write_properties(path: &Path, properties: &Properties, comment: &str) -> Result<()> {
    let timestamp = Local::now().format("%a %b %d %H:%M:%S %:z %Y").to_string();
    write(path, store_properties(properties, Some(comment), &timestamp)).await?;
    tracing::debug!(path = %path.display(), entries = properties.len(), "wrote properties file");
    Ok(())
}

pub(crate) fn display_file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |f| f.to_string_lossy().to_string())
}
