//! Configuration error types

use thiserror::Error;

/// A configuration problem, named by the environment variable that caused it.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Source(#[from] config::ConfigError),

    #[error("{key} must be set")]
    Missing { key: &'static str },

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            key,
            reason: reason.into(),
        }
    }

    /// The offending variable, if the error came from validation.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            ConfigError::Source(_) => None,
            ConfigError::Missing { key } | ConfigError::Invalid { key, .. } => Some(*key),
        }
    }
}
