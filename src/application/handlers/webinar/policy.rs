//! Scheduling rules applied on top of the entity invariants.

use chrono::Duration;

use crate::domain::foundation::{Timestamp, ValidationError};

/// Optional limits configured per deployment.
///
/// The default policy imposes nothing beyond the entity invariants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulingPolicy {
    /// How far ahead of "now" a webinar must start.
    pub minimum_notice: Option<Duration>,
    /// Upper bound on seat capacity.
    pub max_seats: Option<i32>,
}

impl SchedulingPolicy {
    pub fn with_minimum_notice(mut self, notice: Duration) -> Self {
        self.minimum_notice = Some(notice);
        self
    }

    pub fn with_max_seats(mut self, max_seats: i32) -> Self {
        self.max_seats = Some(max_seats);
        self
    }

    pub(crate) fn check_seats(&self, seats: i32) -> Result<(), ValidationError> {
        match self.max_seats {
            Some(max) if seats > max => Err(ValidationError::out_of_range("seats", 1, max, seats)),
            _ => Ok(()),
        }
    }

    pub(crate) fn check_start(
        &self,
        start_date: &Timestamp,
        now: &Timestamp,
    ) -> Result<(), ValidationError> {
        let Some(notice) = self.minimum_notice else {
            return Ok(());
        };
        // A deadline past the end of the calendar admits no start date.
        let too_soon = match now.checked_plus(notice) {
            Some(earliest) => start_date.is_before(&earliest),
            None => true,
        };
        if too_soon {
            return Err(ValidationError::TooSoon {
                minimum_notice_hours: notice.num_hours(),
            });
        }
        Ok(())
    }
}
