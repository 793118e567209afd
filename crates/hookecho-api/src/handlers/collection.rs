//! Postman collection download and legacy redirect handlers.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{error, instrument};

use crate::{
    error::{ApiError, Result},
    AppState,
};

/// Serves the Postman collection file as a download.
///
/// The file is read fresh on every request and must parse as JSON; the raw
/// bytes go out unmodified with a one-hour public cache directive.
///
/// # Errors
///
/// Returns 500 with a generic body when the file is missing, unreadable, or
/// not valid JSON. The specific cause is logged, not exposed.
#[instrument(name = "download_collection", skip(state))]
pub async fn download_collection(State(state): State<AppState>) -> Result<Response> {
    let path = &state.config.collection_path;

    let raw = tokio::fs::read(path).await.map_err(|e| {
        error!(path = %path, error = %e, "failed to read collection file");
        ApiError::CollectionUnavailable(e.to_string())
    })?;

    // Validate without re-serializing so the served bytes stay identical
    // to the file on disk.
    if let Err(e) = serde_json::from_slice::<serde_json::Value>(&raw) {
        error!(path = %path, error = %e, "collection file is not valid JSON");
        return Err(ApiError::CollectionUnavailable(e.to_string()));
    }

    let disposition =
        format!("attachment; filename=\"{}\"", state.config.collection_file_name());

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
            (header::CACHE_CONTROL, "public, max-age=3600".to_string()),
        ],
        raw,
    )
        .into_response())
}

/// Redirects the legacy collection path to the canonical URL.
///
/// Built by hand because clients that bookmarked the old path expect an
/// exact 301, while axum's `Redirect::permanent` answers 308.
pub async fn legacy_collection_redirect(State(state): State<AppState>) -> Response {
    (
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, state.config.canonical_collection_url.clone())],
    )
        .into_response()
}
