//! Liveness probe.

use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response structure.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status; always healthy while the process responds.
    pub status: &'static str,
    /// Timestamp when the check was performed.
    pub timestamp: DateTime<Utc>,
    /// Service version information.
    pub version: &'static str,
}

/// Reports process liveness.
///
/// The service has no external dependencies to probe, so responding at all
/// means it is healthy.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
