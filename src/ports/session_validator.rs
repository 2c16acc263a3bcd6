//! Session validation port for bearer tokens.
//!
//! HTTP middleware calls this to turn a token into the caller identity. It is
//! scheme-agnostic: a static token table, an OIDC provider or a test double all fit.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates access tokens and extracts user identity.
///
/// # Contract
///
/// Implementations must return `AuthError::InvalidToken` for unknown or
/// malformed tokens.
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a token (without the "Bearer " prefix) and return the user.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
