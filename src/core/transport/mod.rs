//! Transport layer for the MCP server.
//!
//! The server speaks MCP over standard input/output using the `rmcp` stdio
//! transport. Framing and JSON-RPC handling belong to `rmcp`; this module only
//! starts the service and waits for it to finish.

mod error;
mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
