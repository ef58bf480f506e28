//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Each tool forwards validated arguments to one Webflow API endpoint.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `catalog.rs` - The closed set of tool names and their descriptors
//! - `validation.rs` - Schema-driven argument validation
//! - `registry.rs` - Dispatch from tool name to tool implementation
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with params, `execute()` and `to_tool()`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add a `ToolName` variant; the compiler then points at every match that
//!    needs the new arm

pub mod catalog;
pub mod definitions;
mod error;
mod registry;
pub mod validation;

pub use catalog::{ToolName, catalog};
pub use error::ToolError;
pub use registry::ToolRegistry;
