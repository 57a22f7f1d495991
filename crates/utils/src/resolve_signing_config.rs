use std::path::Path;

use anyhow::Result;
use buildstamp_core::{Config, SigningConfig, SigningError, SigningOutcome, TaskSelection};

use crate::{properties_file::display_file_name, read_properties};

pub const RELEASE_SIGNING_CONFIG: &str = "releaseConfig";

const KEY_ALIAS: &str = "key_alias";
const KEY_PASSWORD: &str = "key_password";
const STORE_FILENAME: &str = "store_filename";
const STORE_PASSWORD: &str = "store_password";

/// Build the release signing config for a module when a release task was requested.
///
/// A missing keystore properties file is not an error: the outcome is
/// [`SigningOutcome::Missing`] and the build continues unsigned.
///
/// # Errors
/// Returns error if the keystore properties file exists but cannot be read or lacks a key.
pub async fn resolve_signing_config(
    module_dir: &Path,
    selection: &TaskSelection,
    config: &Config,
) -> Result<SigningOutcome> {
    if !selection.is_release() {
        return Ok(SigningOutcome::Skipped);
    }

    let path = module_dir.join(&config.keystore_file);
    let file = display_file_name(&path);
    if !path.exists() {
        tracing::warn!(path = %path.display(), "no keystore properties, release stays unsigned");
        return Ok(SigningOutcome::Missing { file });
    }

    let properties = read_properties(&path).await?;
    let value = |key: &str| -> Result<String, SigningError> {
        properties
            .get(key)
            .map(str::to_string)
            .ok_or_else(|| SigningError::MissingKey {
                file: file.clone(),
                key: key.to_string(),
            })
    };

    let signing_config = SigningConfig::new(
        RELEASE_SIGNING_CONFIG.to_string(),
        config.release_build_type.clone(),
        value(KEY_ALIAS)?,
        value(KEY_PASSWORD)?,
        module_dir.join(value(STORE_FILENAME)?),
        value(STORE_PASSWORD)?,
    );
    tracing::debug!(config = ?signing_config, "resolved release signing config");
    Ok(SigningOutcome::Configured(signing_config))
}
