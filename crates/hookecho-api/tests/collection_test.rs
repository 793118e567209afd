//! Integration tests for the collection file server.
//!
//! Covers the download contract (raw bytes, download headers, cache
//! directive), the two failure modes (missing file, unparsable file), and
//! the legacy path's permanent redirect.

use std::io::Write;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use hookecho_api::{create_router, AppState, Config};
use tempfile::NamedTempFile;
use tower::ServiceExt;

fn app_with_collection(path: &str) -> Router {
    let config = Config { collection_path: path.to_string(), ..Config::default() };
    create_router(AppState::new(config))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).expect("build request")
}

#[tokio::test]
async fn download_returns_raw_file_bytes_with_headers() {
    let contents = br#"{"info":{"name":"demo"},"item":[]}"#;
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents).expect("write collection");
    file.flush().expect("flush collection");

    let path = file.path().to_str().expect("temp path is UTF-8").to_string();
    let file_name = file.path().file_name().expect("file name").to_string_lossy().into_owned();

    let response = app_with_collection(&path)
        .oneshot(get("/postman-collection"))
        .await
        .expect("execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers().clone();
    assert_eq!(headers.get("content-type").expect("content-type"), "application/json");
    assert_eq!(
        headers.get("content-disposition").expect("content-disposition"),
        format!("attachment; filename=\"{file_name}\"").as_str()
    );
    assert_eq!(headers.get("cache-control").expect("cache-control"), "public, max-age=3600");

    let body =
        axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
    assert_eq!(body.as_ref(), contents, "served bytes should match the file exactly");
}

#[tokio::test]
async fn download_fails_when_file_is_missing() {
    let response = app_with_collection("/nonexistent/collection.json")
        .oneshot(get("/postman-collection"))
        .await
        .expect("execute request");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body =
        axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
    let body: serde_json::Value = serde_json::from_slice(&body).expect("parse error body");

    assert_eq!(body["error"], "Failed to load Postman collection");
    assert_eq!(body["message"], "The Postman collection file could not be loaded");
}

#[tokio::test]
async fn download_fails_when_file_is_not_json() {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(b"definitely not json").expect("write contents");
    file.flush().expect("flush contents");

    let path = file.path().to_str().expect("temp path is UTF-8").to_string();

    let response = app_with_collection(&path)
        .oneshot(get("/postman-collection"))
        .await
        .expect("execute request");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn legacy_path_redirects_permanently_to_canonical_url() {
    let canonical = "https://hooks.example.com/api/postman-collection";
    let config = Config {
        canonical_collection_url: canonical.to_string(),
        ..Config::default()
    };
    let app = create_router(AppState::new(config));

    let response = app
        .oneshot(get("/webhook-postman-collection.json"))
        .await
        .expect("execute request");

    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.headers().get("location").expect("location header"), canonical);
}
