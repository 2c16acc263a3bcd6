//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `webinar` - Webinar aggregate and its failure taxonomy

pub mod foundation;
pub mod webinar;
