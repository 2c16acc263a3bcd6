//! Clock port.

use crate::domain::foundation::Timestamp;

/// Source of the current time.
///
/// Use cases never read ambient system time; they ask a `Clock`, which keeps
/// them deterministic under test.
pub trait Clock: Send + Sync {
    /// Get the current time.
    fn now(&self) -> Timestamp;
}
