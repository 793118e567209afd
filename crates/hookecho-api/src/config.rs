//! Configuration management for the hookecho demo service.

use std::{net::SocketAddr, path::Path, str::FromStr};

use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "config.toml";

/// Service configuration with defaults, file, and environment overrides.
///
/// Configuration is loaded in priority order:
/// 1. Environment variables (highest priority)
/// 2. Configuration file (`config.toml`)
/// 3. Built-in defaults (lowest priority)
///
/// The service works out-of-the-box with its defaults; nothing has to be
/// set to run the demo locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server bind address.
    ///
    /// Environment variable: `HOST`
    #[serde(default = "default_host", alias = "HOST")]
    pub host: String,
    /// Server bind port.
    ///
    /// Environment variable: `PORT`
    #[serde(default = "default_port", alias = "PORT")]
    pub port: u16,
    /// HTTP request timeout in seconds.
    ///
    /// Environment variable: `REQUEST_TIMEOUT`
    #[serde(default = "default_request_timeout", alias = "REQUEST_TIMEOUT")]
    pub request_timeout: u64,
    /// Path of the Postman collection file served for download.
    ///
    /// Read fresh on every request, so the file can be replaced without a
    /// restart. Environment variable: `COLLECTION_PATH`
    #[serde(default = "default_collection_path", alias = "COLLECTION_PATH")]
    pub collection_path: String,
    /// Absolute URL the legacy collection path redirects to.
    ///
    /// Environment variable: `CANONICAL_COLLECTION_URL`
    #[serde(
        default = "default_canonical_collection_url",
        alias = "CANONICAL_COLLECTION_URL"
    )]
    pub canonical_collection_url: String,
    /// Log level configuration.
    ///
    /// Environment variable: `RUST_LOG`
    #[serde(default = "default_log_level", alias = "RUST_LOG")]
    pub rust_log: String,
}

impl Config {
    /// Loads configuration from defaults, `config.toml`, and environment
    /// variable overrides, then validates the result.
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(""));

        let config: Self = figment.extract().context("Failed to load configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Parses the server socket address from host and port.
    pub fn parse_server_addr(&self) -> Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.host, self.port);
        SocketAddr::from_str(&addr_str).context("Invalid server address")
    }

    /// File name advertised in the download `Content-Disposition` header.
    pub fn collection_file_name(&self) -> String {
        Path::new(&self.collection_path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.collection_path.clone())
    }

    /// Validates configuration values.
    fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("port must be greater than 0");
        }

        if self.request_timeout == 0 {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        if self.collection_path.is_empty() {
            anyhow::bail!("collection_path must not be empty");
        }

        if !self.canonical_collection_url.starts_with("http://")
            && !self.canonical_collection_url.starts_with("https://")
        {
            anyhow::bail!("canonical_collection_url must be an absolute http(s) URL");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout: default_request_timeout(),
            collection_path: default_collection_path(),
            canonical_collection_url: default_canonical_collection_url(),
            rust_log: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout() -> u64 {
    30
}

fn default_collection_path() -> String {
    "webhook-postman-collection.json".to_string()
}

fn default_canonical_collection_url() -> String {
    "https://webhook.eu-contentstackapps.com/api/postman-collection".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
