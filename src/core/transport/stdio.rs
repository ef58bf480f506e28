//! Serves the Webflow tools over stdin/stdout.
//!
//! stdout carries newline-delimited JSON-RPC and nothing else, which is why
//! all logging goes to stderr. The process exits once the client closes stdin.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// Runs an [`McpServer`] on the process's standard streams.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve `server` until the client disconnects.
    ///
    /// A failed MCP handshake is reported as [`TransportError::InitError`];
    /// anything that ends the session abnormally afterwards is a
    /// [`TransportError::ServiceError`].
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!(
            "{} v{} listening on stdio",
            server.name(),
            server.version()
        );

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        let reason = service
            .waiting()
            .await
            .map_err(|e| TransportError::service(e.to_string()))?;

        info!("Client session ended: {:?}", reason);
        Ok(())
    }
}
