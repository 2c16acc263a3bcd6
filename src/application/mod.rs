//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Each handler performs at most one repository read and one write.

pub mod handlers;

pub use handlers::{
    OrganizeWebinarCommand, OrganizeWebinarHandler, OrganizeWebinarResult, SchedulingPolicy,
    UpdateSeatsCommand, UpdateSeatsHandler, UpdateSeatsResult,
};
