//! HTTP routes for webinar endpoints.

use axum::{routing::post, Router};

use super::handlers::{organize_webinar, update_seats, WebinarHandlers};

/// Creates the webinar router with all endpoints.
pub fn webinar_routes(handlers: WebinarHandlers) -> Router {
    Router::new()
        .route("/webinars", post(organize_webinar))
        .route("/webinars/:id/seats", post(update_seats))
        .with_state(handlers)
}
