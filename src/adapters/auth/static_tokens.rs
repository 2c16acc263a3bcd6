//! Static bearer-token validator.
//!
//! Maps configured tokens to user ids. Good enough for service-to-service
//! callers and for tests; swap in an OIDC-backed `SessionValidator` for
//! end-user sessions.
//!
//! # Example
//!
//! ```ignore
//! use webinars::adapters::auth::StaticTokenValidator;
//! use webinars::domain::foundation::UserId;
//!
//! let validator = StaticTokenValidator::new()
//!     .with_user("valid-token", UserId::new("test-user").unwrap());
//!
//! let user = validator.validate("valid-token").await?;
//! assert_eq!(user.id.as_str(), "test-user");
//! ```

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Session validator backed by a fixed token table.
///
/// Tokens not in the table return `InvalidToken`.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenValidator {
    tokens: HashMap<String, UserId>,
}

impl StaticTokenValidator {
    /// Creates a validator that accepts no tokens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a validator from `(token, user)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, UserId)>) -> Self {
        Self {
            tokens: pairs.into_iter().collect(),
        }
    }

    /// Adds a valid token that maps to a user.
    pub fn with_user(mut self, token: impl Into<String>, user_id: UserId) -> Self {
        self.tokens.insert(token.into(), user_id);
        self
    }

    /// Returns the number of registered tokens.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

#[async_trait]
impl SessionValidator for StaticTokenValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        self.tokens
            .get(token)
            .cloned()
            .map(AuthenticatedUser::new)
            .ok_or(AuthError::InvalidToken)
    }
}
