//! Webinar domain module.
//!
//! Handles webinar creation and capacity changes. The aggregate enforces its
//! own invariants; use cases in `application::handlers::webinar` orchestrate it.

mod aggregate;
mod errors;

pub use aggregate::{Webinar, WebinarProps};
pub use errors::WebinarError;
