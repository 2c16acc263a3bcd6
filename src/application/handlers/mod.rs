//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod webinar;

pub use webinar::{
    OrganizeWebinarCommand, OrganizeWebinarHandler, OrganizeWebinarResult, SchedulingPolicy,
    UpdateSeatsCommand, UpdateSeatsHandler, UpdateSeatsResult,
};
