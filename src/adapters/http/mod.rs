//! HTTP adapters - REST API implementations.
//!
//! `router` assembles the full application: authenticated webinar routes,
//! an open health probe, request tracing and a per-request timeout.

pub mod middleware;
pub mod webinar;

use std::time::Duration;

use axum::{middleware::from_fn_with_state, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

pub use middleware::{auth_middleware, AuthState, RequireAuth};
pub use webinar::{webinar_routes, WebinarHandlers};

/// Builds the application router.
pub fn router(handlers: WebinarHandlers, validator: AuthState, request_timeout: Duration) -> Router {
    let webinars = webinar_routes(handlers).layer(from_fn_with_state(validator, auth_middleware));

    Router::new()
        .route("/health", get(webinar::health))
        .merge(webinars)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(request_timeout)),
        )
}
