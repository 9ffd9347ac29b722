//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use taxisim::runtime::SimulationError;

/// Errors surfaced to HTTP callers.
///
/// The three kinds the API reports: lifecycle state conflicts (409),
/// malformed request bodies (400), and response encoding failures
/// (500). All are handled per-request; none are fatal to the process.
#[derive(Debug)]
pub enum ApiError {
    /// The requested lifecycle transition conflicts with the current state.
    Conflict(String),
    /// The request body failed to parse into the expected entity shape.
    BadRequest(String),
    /// Response serialization failed.
    Internal(String),
}

impl From<SimulationError> for ApiError {
    fn from(e: SimulationError) -> Self {
        Self::Conflict(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Conflict(m) => (StatusCode::CONFLICT, m),
            ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
            ApiError::Internal(m) => (StatusCode::INTERNAL_SERVER_ERROR, m),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
