//! Webflow MCP Server Library
//!
//! This crate exposes Webflow CMS operations as Model Context Protocol (MCP)
//! tools served over stdio.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and the
//!   stdio transport
//! - **domains**: business logic organized by bounded contexts
//!   - **webflow**: HTTP client for the Webflow Data API v2
//!   - **tools**: tool catalog, argument validation and dispatch
//!
//! # Example
//!
//! ```rust,no_run
//! use webflow_mcp_server::core::{Config, McpServer, StdioTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config)?;
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
