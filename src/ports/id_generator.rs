//! Identifier generation port.

use crate::domain::foundation::WebinarId;

/// Produces unique, opaque identifiers for new webinars.
///
/// Injected so tests can pin ids while production uses random ones.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh identifier, unique per call in production.
    fn generate(&self) -> WebinarId;
}
