//! HTTP server configuration and request routing.
//!
//! Provides axum server setup with middleware stack and graceful shutdown.
//! Requests flow through middleware in order:
//! 1. Request ID injection
//! 2. CORS handling (permissive; the demo UI is a browser client)
//! 3. Request/response tracing
//! 4. Timeout enforcement
//! 5. Handler execution
//!
//! # Graceful Shutdown
//!
//! The server stops accepting connections on SIGINT or SIGTERM and lets
//! in-flight requests finish before returning.

use std::time::Duration;

use anyhow::Result;
use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use uuid::Uuid;

use crate::{handlers, AppState, Config};

/// Creates the axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use hookecho_api::{create_router, AppState, Config};
///
/// let app = create_router(AppState::new(Config::default()));
/// // Serve the app...
/// ```
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    let timeout = TimeoutLayer::new(Duration::from_secs(state.config.request_timeout));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/webhook", get(handlers::webhook_info).post(handlers::receive_webhook))
        .route("/postman-collection", get(handlers::download_collection))
        .route("/webhook-postman-collection.json", get(handlers::legacy_collection_redirect))
        .route("/webhook-responses", get(handlers::list_responses))
        .layer(timeout)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(middleware::from_fn(inject_request_id))
        .with_state(state)
}

/// Middleware to inject a request ID into all responses.
///
/// Adds an `X-Request-Id` header for correlating log lines with responses.
async fn inject_request_id(req: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();

    let mut req = req;
    req.extensions_mut().insert(request_id.clone());

    let mut response = next.run(req).await;

    if let Ok(header_value) = request_id.parse() {
        response.headers_mut().insert("X-Request-Id", header_value);
    }

    response
}

/// Starts the HTTP server with graceful shutdown support.
///
/// Binds to the configured address and serves requests until a shutdown
/// signal is received.
///
/// # Errors
///
/// Returns an error if the configured address is invalid, the port is
/// already in use, or the network interface is unavailable.
pub async fn start_server(config: Config) -> Result<()> {
    let addr = config.parse_server_addr()?;
    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("HTTP server stopped gracefully");
    Ok(())
}

/// Waits for shutdown signal (CTRL+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received CTRL+C, starting graceful shutdown");
        },
        () = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
