//! Configuration management for the MCP server.
//!
//! Configuration is read once at startup from environment variables (and an
//! optional `.env` file) and then shared immutably.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::{Error, Result};

/// Environment variable holding the Webflow API token.
pub const API_TOKEN_VAR: &str = "WEBFLOW_API_TOKEN";

/// Environment variable overriding the Webflow API base URL.
pub const BASE_URL_VAR: &str = "WEBFLOW_API_BASE_URL";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Webflow API access.
    pub webflow: WebflowConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Webflow API credentials and endpoint.
#[derive(Clone, Serialize, Deserialize)]
pub struct WebflowConfig {
    /// Bearer token sent on every request.
    pub api_token: String,

    /// Base URL of the Webflow Data API.
    pub base_url: String,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for WebflowConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebflowConfig")
            .field("api_token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl WebflowConfig {
    /// Public Webflow Data API v2 endpoint.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.webflow.com/v2";

    /// Create a Webflow configuration for the public API.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at another base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "webflow-mcp-server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Read the logging section on its own, so logging can start before the
    /// rest of the configuration is validated.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut logging = Self::default();
        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            logging.level = level;
        }
        logging
    }
}

impl Config {
    /// Create a configuration with default server and logging sections.
    pub fn new(webflow: WebflowConfig) -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            webflow,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// `WEBFLOW_API_TOKEN` is required; a missing or blank token is a
    /// configuration error.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_token = std::env::var(API_TOKEN_VAR)
            .ok()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| Error::config(format!("{API_TOKEN_VAR} environment variable is required")))?;

        let mut webflow = WebflowConfig::new(api_token);
        if let Ok(base_url) = std::env::var(BASE_URL_VAR) {
            info!("Using Webflow API base URL from environment: {}", base_url);
            webflow = webflow.with_base_url(base_url);
        }

        let mut config = Self::new(webflow);

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        config.logging = LoggingConfig::from_env();

        Ok(config)
    }
}
