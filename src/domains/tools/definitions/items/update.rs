//! Update collection item tool definition.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::tools::definitions::common::summary_result;
use crate::domains::webflow::{CollectionItemPatch, FieldData, WebflowClient, WebflowResult};

/// Parameters for the update item tool.
///
/// Optional fields have no defaults: anything left out is left out of the
/// PATCH body too.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCollectionItemParams {
    #[schemars(description = "Unique identifier for the collection")]
    pub collection_id: String,

    #[schemars(description = "Unique identifier for the item")]
    pub item_id: String,

    #[schemars(description = "Field values to change, keyed by field slug")]
    #[serde(default)]
    pub field_data: Option<FieldData>,

    #[schemars(description = "Whether the item is a draft")]
    #[serde(default)]
    pub is_draft: Option<bool>,

    #[schemars(description = "Whether the item is archived")]
    #[serde(default)]
    pub is_archived: Option<bool>,
}

impl UpdateCollectionItemParams {
    /// Build the PATCH body for this call.
    pub fn patch(&self) -> CollectionItemPatch {
        CollectionItemPatch {
            field_data: self.field_data.clone(),
            is_draft: self.is_draft,
            is_archived: self.is_archived,
        }
    }
}

/// Partially updates an item.
pub struct UpdateCollectionItemTool;

impl UpdateCollectionItemTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "update_collection_item";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Update an existing item in a Webflow CMS collection. Only the given fields are changed.";

    #[instrument(skip_all, fields(collection_id = %params.collection_id, item_id = %params.item_id))]
    pub async fn execute(
        client: &WebflowClient,
        params: UpdateCollectionItemParams,
    ) -> WebflowResult<CallToolResult> {
        info!("Updating collection item");
        let item = client
            .update_collection_item(&params.collection_id, &params.item_id, &params.patch())
            .await?;
        summary_result("Collection item updated successfully", &item)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<UpdateCollectionItemParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
