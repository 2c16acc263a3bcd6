//! Authentication configuration

use serde::Deserialize;

use super::error::ConfigError;
use crate::domain::foundation::UserId;

/// Authentication configuration for the static bearer-token validator.
///
/// `WEBINARS__AUTH__TOKENS=token-a:alice,token-b:bob`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// Comma-separated `token:user_id` pairs
    #[serde(default)]
    pub tokens: String,
}

impl AuthConfig {
    /// Parses the token table.
    ///
    /// Blank entries are skipped; the user id is everything after the first `:`.
    pub fn token_entries(&self) -> Result<Vec<(String, UserId)>, ConfigError> {
        self.tokens
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                let malformed = || {
                    ConfigError::invalid(
                        "WEBINARS__AUTH__TOKENS",
                        format!("entry '{entry}' is not token:user_id"),
                    )
                };
                let (token, user_id) = entry.split_once(':').ok_or_else(malformed)?;
                let token = token.trim();
                if token.is_empty() {
                    return Err(malformed());
                }
                let user_id = UserId::new(user_id.trim()).map_err(|_| malformed())?;
                Ok((token.to_string(), user_id))
            })
            .collect()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.token_entries().map(|_| ())
    }
}
