//! Error translation at the API boundary.
//!
//! Every failure from the core is converted here, in one place, to an
//! HTTP status code and a JSON error envelope `{"error": string}`.
//! Validation failures carry their message to the caller; everything else
//! is logged server-side and surfaced as a generic 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use journal_core::JournalError;

/// API-level error, ready for translation into a response.
#[derive(Debug)]
pub enum ApiError {
    /// Client input invalid; message is returned to the caller
    Validation(String),
    /// Storage or classification failure; detail stays server-side
    Internal(String),
}

impl From<JournalError> for ApiError {
    fn from(err: JournalError) -> Self {
        match err {
            JournalError::Validation(message) => ApiError::Validation(message),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal(detail) => {
                log::error!("Request failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
