//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration and serves the Webflow tools over
//! stdio. Logs go to stderr; stdout is reserved for protocol messages.

use anyhow::Result;
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

use webflow_mcp_server::core::{Config, McpServer, StdioTransport, config::LoggingConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Logging first, so a configuration failure is reported through it
    init_logging(&LoggingConfig::from_env().level);

    let config = Config::from_env().inspect_err(|e| error!("Failed to start: {}", e))?;

    info!("Starting {} v{}", config.server.name, config.server.version);

    let server = McpServer::new(config).inspect_err(|e| error!("Failed to start: {}", e))?;

    info!("Server initialized");

    StdioTransport::run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level and format.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
