//! Domains module containing business logic organized by bounded contexts.
//!
//! - `webflow`: the HTTP adapter for the Webflow Data API
//! - `tools`: the MCP tools built on top of it

pub mod tools;
pub mod webflow;
