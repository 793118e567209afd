//! Hookecho HTTP API.
//!
//! A demonstration webhook service with three concerns: receiving and
//! echoing JSON webhook payloads, distributing a static Postman collection
//! file, and serving illustrative sample capture data for the demo UI.
//! Every request is handled independently and statelessly; the only shared
//! state is the immutable configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;

use std::sync::Arc;

pub use config::Config;
pub use error::ApiError;
pub use server::{create_router, start_server};

/// Shared state handed to request handlers.
///
/// Holds only the loaded configuration. There is deliberately no mutable
/// state here: the service keeps nothing between requests.
#[derive(Clone)]
pub struct AppState {
    /// Immutable service configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Wraps a loaded configuration for sharing across handlers.
    pub fn new(config: Config) -> Self {
        Self { config: Arc::new(config) }
    }
}
