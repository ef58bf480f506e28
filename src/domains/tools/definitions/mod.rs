//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file, grouped by Webflow resource.

pub mod collections;
pub mod common;
pub mod items;
pub mod sites;

pub use collections::{GetCollectionsParams, GetCollectionsTool};
pub use items::{
    CreateCollectionItemParams, CreateCollectionItemTool, DeleteCollectionItemParams,
    DeleteCollectionItemTool, GetCollectionItemsParams, GetCollectionItemsTool,
    PublishCollectionItemsParams, PublishCollectionItemsTool, UpdateCollectionItemParams,
    UpdateCollectionItemTool,
};
pub use sites::{GetSiteParams, GetSiteTool, GetSitesParams, GetSitesTool};
