//! Error types for the Folio portfolio

use thiserror::Error;

use crate::contact::Field;

/// Top-level error type for the portfolio core
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Project fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Submission error: {0}")]
    Submit(#[from] SubmitError),

    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),
}

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required value `{key}` (set {env})")]
    Missing {
        key: &'static str,
        env: &'static str,
    },

    #[error("Invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Errors from the repository listing request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("HTTP error! Status: {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Unexpected response body: {0}")]
    Decode(String),
}

/// Errors from a contact form submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Required field is empty: {0}")]
    Incomplete(Field),

    #[error("A message is already being sent")]
    InFlight,

    #[error("Mail relay rejected the message ({status}): {body}")]
    Relay { status: u16, body: String },

    #[error("Mail relay unreachable: {0}")]
    Transport(String),

    #[error("Mail relay is not configured: {0}")]
    NotConfigured(String),
}

/// Errors from the downloadable résumé asset
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("No résumé file configured")]
    Unavailable,

    #[error("Failed to copy résumé: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for operations that can fail with any core error
pub type Result<T> = std::result::Result<T, FolioError>;
