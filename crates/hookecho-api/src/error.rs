//! Error types for the hookecho API.
//!
//! The service has exactly two failure modes: a webhook body that is not
//! valid JSON, and a collection file that cannot be read or parsed. Each
//! failure is terminal for its request; there are no retries or partial
//! results. The `IntoResponse` impl owns the wire shape of both bodies so
//! handlers can propagate with `?`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias using `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;

/// API error taxonomy.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body was not valid JSON.
    #[error("invalid webhook payload: {0}")]
    InvalidPayload(String),

    /// Collection file could not be read or did not parse as JSON.
    #[error("collection unavailable: {0}")]
    CollectionUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidPayload(reason) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "success": false,
                    "message": "Error processing webhook",
                    "error": reason,
                })),
            )
                .into_response(),

            // Clients get a generic body; the specific cause is logged at
            // the call site.
            Self::CollectionUnavailable(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to load Postman collection",
                    "message": "The Postman collection file could not be loaded",
                })),
            )
                .into_response(),
        }
    }
}
