//! Webflow domain module.
//!
//! Thin adapter over the Webflow Data API v2:
//!
//! - `client.rs` - one async method per REST endpoint
//! - `payload.rs` - request bodies and slug derivation
//! - `error.rs` - API error types

mod client;
mod error;
pub mod payload;

pub use client::WebflowClient;
pub use error::{WebflowError, WebflowResult};
pub use payload::{CollectionItemPatch, CollectionItemPayload, FieldData, Pagination};
