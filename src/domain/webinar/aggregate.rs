//! Webinar aggregate entity.
//!
//! A webinar belongs to exactly one organizer. Its capacity can only grow,
//! and only the organizer may grow it.

use crate::domain::foundation::{Timestamp, UserId, ValidationError, WebinarId};
use serde::{Deserialize, Serialize};

/// Field values used to build a webinar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebinarProps {
    pub id: WebinarId,
    pub organizer_id: UserId,
    pub title: String,
    pub seats: i32,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
}

/// Webinar aggregate.
///
/// # Invariants
///
/// - `id` and `organizer_id` never change after creation
/// - `title` is non-empty
/// - `seats > 0`
/// - `start_date < end_date` at creation
/// - `seats` only ever increases
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webinar {
    id: WebinarId,
    organizer_id: UserId,
    title: String,
    seats: i32,
    start_date: Timestamp,
    end_date: Timestamp,
}

impl Webinar {
    /// Create a new webinar.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the title is empty
    /// - `NonPositive` if seats is zero or negative
    /// - `InvalidDateRange` if the webinar does not end after it starts
    pub fn create(props: WebinarProps) -> Result<Self, ValidationError> {
        Self::validate_title(&props.title)?;
        Self::validate_seats(props.seats)?;
        if !props.start_date.is_before(&props.end_date) {
            return Err(ValidationError::InvalidDateRange);
        }

        Ok(Self::reconstitute(props))
    }

    /// Reconstitute a webinar from persistence (no validation).
    pub fn reconstitute(props: WebinarProps) -> Self {
        Self {
            id: props.id,
            organizer_id: props.organizer_id,
            title: props.title,
            seats: props.seats,
            start_date: props.start_date,
            end_date: props.end_date,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the webinar ID.
    pub fn id(&self) -> &WebinarId {
        &self.id
    }

    /// Returns the organizer's user ID.
    pub fn organizer_id(&self) -> &UserId {
        &self.organizer_id
    }

    /// Returns the webinar title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the seat capacity.
    pub fn seats(&self) -> i32 {
        self.seats
    }

    /// Returns when the webinar starts.
    pub fn start_date(&self) -> &Timestamp {
        &self.start_date
    }

    /// Returns when the webinar ends.
    pub fn end_date(&self) -> &Timestamp {
        &self.end_date
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Authorization
    // ─────────────────────────────────────────────────────────────────────────

    /// Checks if the given user organizes this webinar.
    pub fn is_organizer(&self, user_id: &UserId) -> bool {
        &self.organizer_id == user_id
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Raise the seat capacity.
    ///
    /// # Errors
    ///
    /// - `SeatsNotIncreased` if `new_seats` is not strictly greater than the
    ///   current capacity (this also rejects re-applying the same value)
    pub fn update_seats(&mut self, new_seats: i32) -> Result<&Self, ValidationError> {
        if new_seats <= self.seats {
            return Err(ValidationError::SeatsNotIncreased {
                current: self.seats,
                requested: new_seats,
            });
        }

        self.seats = new_seats;
        Ok(self)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn validate_title(title: &str) -> Result<(), ValidationError> {
        if title.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        Ok(())
    }

    fn validate_seats(seats: i32) -> Result<(), ValidationError> {
        if seats <= 0 {
            return Err(ValidationError::non_positive("seats", seats));
        }
        Ok(())
    }
}
