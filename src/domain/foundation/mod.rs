//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the webinar domain.

mod auth;
mod errors;
mod ids;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{RepositoryError, ValidationError};
pub use ids::{UserId, WebinarId};
pub use timestamp::Timestamp;
