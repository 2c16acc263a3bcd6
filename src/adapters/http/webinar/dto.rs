//! HTTP DTOs for webinar endpoints.
//!
//! Field names follow the public JSON contract (`startDate`, `endDate`).

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::foundation::Timestamp;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to organize a new webinar.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizeWebinarRequest {
    pub title: String,
    #[serde(deserialize_with = "seat_count")]
    pub seats: i32,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
}

/// Request to change a webinar's seat capacity.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSeatsRequest {
    #[serde(deserialize_with = "seat_count")]
    pub seats: i32,
}

/// Clients send seats either as a JSON number or as a numeric string.
#[derive(Deserialize)]
#[serde(untagged)]
enum SeatsInput {
    Number(i64),
    Text(String),
}

fn seat_count<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw = match SeatsInput::deserialize(deserializer)? {
        SeatsInput::Number(n) => n,
        SeatsInput::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("seats must be an integer, got {:?}", s)))?,
    };

    i32::try_from(raw).map_err(|_| D::Error::custom(format!("seats out of range: {}", raw)))
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for a newly organized webinar.
#[derive(Debug, Clone, Serialize)]
pub struct OrganizeWebinarResponse {
    pub id: String,
}

/// Plain acknowledgement.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    pub fn internal() -> Self {
        Self::new("Internal server error")
    }
}
