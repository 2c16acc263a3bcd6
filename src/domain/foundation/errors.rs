//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

use super::WebinarId;

/// Errors raised when input violates a domain invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be positive, got {actual}")]
    NonPositive { field: String, actual: i32 },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Start date must be before end date")]
    InvalidDateRange,

    #[error("Seats can only be increased (current: {current}, requested: {requested})")]
    SeatsNotIncreased { current: i32, requested: i32 },

    #[error("Webinar must be scheduled at least {minimum_notice_hours} hours in advance")]
    TooSoon { minimum_notice_hours: i64 },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a non-positive value validation error.
    pub fn non_positive(field: impl Into<String>, actual: i32) -> Self {
        ValidationError::NonPositive {
            field: field.into(),
            actual,
        }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }
}

/// Failures reported by repository adapters.
///
/// The cause is kept as text; callers never branch on driver specifics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Webinar not found in store: {0}")]
    NotFound(WebinarId),

    #[error("Database error during {operation}: {message}")]
    Database { operation: String, message: String },
}

impl RepositoryError {
    /// Creates a database error for the named operation.
    pub fn database(operation: impl Into<String>, message: impl fmt::Display) -> Self {
        RepositoryError::Database {
            operation: operation.into(),
            message: message.to_string(),
        }
    }
}
