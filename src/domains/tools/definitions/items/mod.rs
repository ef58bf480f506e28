//! Collection item tools.
//!
//! - `list`: page through the items of a collection
//! - `create`, `update`, `delete`: item CRUD
//! - `publish`: publish staged items

pub mod create;
pub mod delete;
pub mod list;
pub mod publish;
pub mod update;

pub use create::{CreateCollectionItemParams, CreateCollectionItemTool};
pub use delete::{DeleteCollectionItemParams, DeleteCollectionItemTool};
pub use list::{GetCollectionItemsParams, GetCollectionItemsTool};
pub use publish::{PublishCollectionItemsParams, PublishCollectionItemsTool};
pub use update::{UpdateCollectionItemParams, UpdateCollectionItemTool};
