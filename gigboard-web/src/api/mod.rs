//! HTTP API handlers

pub mod artists;
pub mod health;
pub mod shows;
pub mod ui;
pub mod venues;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

/// Body returned by every write handler: the user-visible flash line
/// plus the page the client should land on next.
///
/// Write failures keep the original flash-and-redirect shape (one
/// message, neutral page) instead of surfacing a 5xx.
#[derive(Debug, Serialize)]
pub struct FlashResponse {
    pub flash: String,
    pub redirect: String,
}

impl FlashResponse {
    pub fn to_home(flash: String) -> Json<Self> {
        Json(Self {
            flash,
            redirect: "/".to_string(),
        })
    }

    pub fn to_page(flash: String, redirect: String) -> Json<Self> {
        Json(Self { flash, redirect })
    }
}

/// Errors surfaced by read handlers
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    DatabaseError(String),
}

impl From<gigboard_common::Error> for ApiError {
    fn from(err: gigboard_common::Error) -> Self {
        match err {
            gigboard_common::Error::NotFound(what) => ApiError::NotFound(what),
            other => ApiError::DatabaseError(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(what) => (StatusCode::NOT_FOUND, format!("Not found: {}", what)),
            ApiError::DatabaseError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", msg),
            ),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
