use thiserror::Error;

/// Failures reading or interpreting a properties-backed store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error(">>> Could not read {0} file!")]
    Unreadable(String),
    #[error("Missing key '{key}' in {file}")]
    MissingKey { file: String, key: String },
    #[error("Invalid number '{value}' for key '{key}'")]
    InvalidNumber { key: String, value: String },
}

/// Failures building a release signing config.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SigningError {
    #[error("Signing config is missing key '{key}' in {file}")]
    MissingKey { file: String, key: String },
}
