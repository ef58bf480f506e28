//! Tool-specific error types.

use rmcp::{ErrorData as McpError, model::ErrorCode};
use thiserror::Error;

use crate::domains::webflow::WebflowError;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid parameters: {0}")]
    InvalidArguments(String),

    /// The Webflow call behind the tool failed.
    #[error("Error executing {tool}: {source}")]
    ExecutionFailed {
        tool: &'static str,
        #[source]
        source: WebflowError,
    },
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "execution failed" error.
    pub fn execution_failed(tool: &'static str, source: WebflowError) -> Self {
        Self::ExecutionFailed { tool, source }
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        let message = err.to_string();
        match err {
            ToolError::NotFound(_) => McpError::new(ErrorCode::METHOD_NOT_FOUND, message, None),
            ToolError::InvalidArguments(_) => McpError::invalid_params(message, None),
            ToolError::ExecutionFailed { .. } => McpError::internal_error(message, None),
        }
    }
}
