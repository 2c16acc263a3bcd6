//! Authentication types for the domain layer.
//!
//! An `AuthenticatedUser` is what the HTTP layer hands to the use cases as the
//! caller identity. Any token scheme can populate it via the `SessionValidator` port.

use super::UserId;
use thiserror::Error;

/// Caller identity resolved from a bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The unique user identifier.
    pub id: UserId,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(id: UserId) -> Self {
        Self { id }
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or unknown.
    #[error("Invalid token")]
    InvalidToken,
}
