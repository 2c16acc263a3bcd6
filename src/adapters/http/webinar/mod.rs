//! HTTP adapter for webinar endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ErrorResponse, MessageResponse, OrganizeWebinarRequest, OrganizeWebinarResponse,
    UpdateSeatsRequest,
};
pub use handlers::{health, WebinarHandlers};
pub use routes::webinar_routes;
