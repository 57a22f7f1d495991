use std::{
    fmt::{Debug, Display},
    path::PathBuf,
};

use serde::{Serialize, Serializer};

const REDACTED: &str = "********";

/// Credential bundle applied to release build output for package signing.
///
/// Passwords never leave this type in clear text through `Debug`, `Display` or serialization;
/// use the accessors when the secrets are actually needed.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SigningConfig {
    name: String,
    build_type: String,
    key_alias: String,
    #[serde(serialize_with = "redact")]
    key_password: String,
    store_file: PathBuf,
    #[serde(serialize_with = "redact")]
    store_password: String,
}

fn redact<S: Serializer>(_value: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(REDACTED)
}

impl SigningConfig {
    #[must_use]
    pub const fn new(
        name: String,
        build_type: String,
        key_alias: String,
        key_password: String,
        store_file: PathBuf,
        store_password: String,
    ) -> Self {
        Self {
            name,
            build_type,
            key_alias,
            key_password,
            store_file,
            store_password,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build type the config is attached to
    #[must_use]
    pub fn build_type(&self) -> &str {
        &self.build_type
    }

    #[must_use]
    pub fn key_alias(&self) -> &str {
        &self.key_alias
    }

    #[must_use]
    pub fn key_password(&self) -> &str {
        &self.key_password
    }

    #[must_use]
    pub const fn store_file(&self) -> &PathBuf {
        &self.store_file
    }

    #[must_use]
    pub fn store_password(&self) -> &str {
        &self.store_password
    }
}

impl Debug for SigningConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningConfig")
            .field("name", &self.name)
            .field("build_type", &self.build_type)
            .field("key_alias", &self.key_alias)
            .field("key_password", &REDACTED)
            .field("store_file", &self.store_file)
            .field("store_password", &REDACTED)
            .finish()
    }
}

impl Display for SigningConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{key_alias={}, key_password={REDACTED}, store_file={}, store_password={REDACTED}}}",
            self.key_alias,
            self.store_file.display()
        )
    }
}

/// Result of the signing step for one build invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SigningOutcome {
    /// No release task requested
    Skipped,
    /// Release requested but the keystore properties file does not exist
    Missing { file: String },
    /// Release signing config attached
    Configured(SigningConfig),
}

impl SigningOutcome {
    #[must_use]
    pub const fn config(&self) -> Option<&SigningConfig> {
        match self {
            Self::Configured(config) => Some(config),
            _ => None,
        }
    }
}
