//! HTTP handlers for webinar endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::webinar::{
    OrganizeWebinarCommand, OrganizeWebinarHandler, UpdateSeatsCommand, UpdateSeatsHandler,
};
use crate::domain::foundation::WebinarId;
use crate::domain::webinar::WebinarError;

use super::dto::{
    ErrorResponse, MessageResponse, OrganizeWebinarRequest, OrganizeWebinarResponse,
    UpdateSeatsRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct WebinarHandlers {
    organize_handler: Arc<OrganizeWebinarHandler>,
    update_seats_handler: Arc<UpdateSeatsHandler>,
}

impl WebinarHandlers {
    pub fn new(
        organize_handler: Arc<OrganizeWebinarHandler>,
        update_seats_handler: Arc<UpdateSeatsHandler>,
    ) -> Self {
        Self {
            organize_handler,
            update_seats_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /webinars - Organize a new webinar
pub async fn organize_webinar(
    State(handlers): State<WebinarHandlers>,
    RequireAuth(user): RequireAuth,
    payload: Result<Json<OrganizeWebinarRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return handle_json_rejection(rejection),
    };

    let cmd = OrganizeWebinarCommand {
        user_id: user.id,
        title: req.title,
        seats: req.seats,
        start_date: req.start_date,
        end_date: req.end_date,
    };

    match handlers.organize_handler.handle(cmd).await {
        Ok(result) => {
            let response = OrganizeWebinarResponse {
                id: result.id.to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_webinar_error(e),
    }
}

/// POST /webinars/:id/seats - Raise a webinar's seat capacity
pub async fn update_seats(
    State(handlers): State<WebinarHandlers>,
    RequireAuth(user): RequireAuth,
    Path(webinar_id): Path<String>,
    payload: Result<Json<UpdateSeatsRequest>, JsonRejection>,
) -> Response {
    let webinar_id = match webinar_id.parse::<WebinarId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("Invalid webinar ID")),
            )
                .into_response()
        }
    };

    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return handle_json_rejection(rejection),
    };

    let cmd = UpdateSeatsCommand {
        webinar_id,
        user_id: user.id,
        seats: req.seats,
    };

    match handlers.update_seats_handler.handle(cmd).await {
        Ok(_) => (StatusCode::OK, Json(MessageResponse::new("Seats updated"))).into_response(),
        Err(e) => handle_webinar_error(e),
    }
}

/// GET /health - Liveness probe
pub async fn health() -> Response {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" }))).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_json_rejection(rejection: JsonRejection) -> Response {
    tracing::debug!(error = %rejection.body_text(), "rejected request body");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(rejection.body_text())),
    )
        .into_response()
}

fn handle_webinar_error(error: WebinarError) -> Response {
    match error {
        WebinarError::Validation(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(e.to_string())),
        )
            .into_response(),
        e @ WebinarError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(e.to_string())),
        )
            .into_response(),
        e @ WebinarError::NotOrganizer => (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new(e.to_string())),
        )
            .into_response(),
        WebinarError::Repository(e) => {
            tracing::error!(error = %e, "repository failure while handling request");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal()),
            )
                .into_response()
        }
    }
}
