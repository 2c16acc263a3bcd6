//! Identifier and clock adapters.
//!
//! Production variants draw on randomness and wall time; the fixed variants
//! keep tests deterministic.

mod clock;
mod id;

pub use clock::{FixedClock, SystemClock};
pub use id::{FixedIdGenerator, UuidIdGenerator};
