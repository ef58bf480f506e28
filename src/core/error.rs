//! Error types and handling for the MCP server.
//!
//! Startup-level errors. Per-call failures are reported to the client through
//! [`crate::domains::tools::ToolError`] instead.

use thiserror::Error;

use super::transport::TransportError;
use crate::domains::webflow::WebflowError;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The Webflow client could not be built.
    #[error("Webflow client error: {0}")]
    Webflow(#[from] WebflowError),

    /// The transport failed to start or stopped abnormally.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
