//! Hookecho webhook demo service.
//!
//! Main entry point. Initializes tracing, loads configuration, and runs the
//! HTTP server until shutdown.

use anyhow::Result;
use hookecho_api::{start_server, Config};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    info!("Starting hookecho webhook demo service");

    let config = Config::load()?;
    info!(
        host = %config.host,
        port = config.port,
        collection_path = %config.collection_path,
        "Configuration loaded"
    );

    start_server(config).await
}

/// Initializes tracing with environment-based configuration.
fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,hookecho=debug,tower_http=debug"))
        .expect("Invalid RUST_LOG environment variable");

    let fmt_layer = fmt::layer().with_target(true).with_file(true).with_line_number(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
