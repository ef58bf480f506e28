//! Collection tools.

pub mod list;

pub use list::{GetCollectionsParams, GetCollectionsTool};
