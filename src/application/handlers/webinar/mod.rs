//! Webinar command handlers.

mod organize_webinar;
mod policy;
mod update_seats;

pub use organize_webinar::{OrganizeWebinarCommand, OrganizeWebinarHandler, OrganizeWebinarResult};
pub use policy::SchedulingPolicy;
pub use update_seats::{UpdateSeatsCommand, UpdateSeatsHandler, UpdateSeatsResult};
