//! Webinar-specific error types.

use thiserror::Error;

use crate::domain::foundation::{RepositoryError, ValidationError, WebinarId};

/// Failures surfaced by the webinar use cases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WebinarError {
    /// Input violated an entity invariant.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No webinar with the requested id exists.
    #[error("Webinar not found")]
    NotFound(WebinarId),

    /// The caller does not organize the webinar.
    #[error("User is not allowed to update this webinar")]
    NotOrganizer,

    /// Persistence failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl WebinarError {
    pub fn not_found(id: WebinarId) -> Self {
        WebinarError::NotFound(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_matches_api_contract() {
        let err = WebinarError::not_found(WebinarId::new("unknown-webinar").unwrap());
        assert_eq!(err.to_string(), "Webinar not found");
    }

    #[test]
    fn not_organizer_message_matches_api_contract() {
        assert_eq!(
            WebinarError::NotOrganizer.to_string(),
            "User is not allowed to update this webinar"
        );
    }

    #[test]
    fn validation_error_converts_and_keeps_message() {
        let err: WebinarError = ValidationError::InvalidDateRange.into();
        assert!(matches!(err, WebinarError::Validation(_)));
        assert_eq!(err.to_string(), "Start date must be before end date");
    }

    #[test]
    fn repository_error_converts_and_keeps_cause() {
        let err: WebinarError = RepositoryError::database("update webinar", "boom").into();
        assert!(matches!(err, WebinarError::Repository(_)));
        assert_eq!(err.to_string(), "Database error during update webinar: boom");
    }
}
