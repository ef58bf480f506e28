//! Site tools.

pub mod get;
pub mod list;

pub use get::{GetSiteParams, GetSiteTool};
pub use list::{GetSitesParams, GetSitesTool};
