//! Create collection item tool definition.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::tools::definitions::common::summary_result;
use crate::domains::webflow::{CollectionItemPayload, FieldData, WebflowClient, WebflowResult};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the create item tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCollectionItemParams {
    #[schemars(description = "Unique identifier for the collection")]
    pub collection_id: String,

    #[schemars(description = "Name of the item")]
    pub name: String,

    /// Derived from `name` when omitted.
    #[schemars(description = "URL slug of the item (derived from the name if omitted)")]
    #[serde(default)]
    pub slug: Option<String>,

    /// Extra fields, keyed by the collection's field slugs.
    #[schemars(
        description = "Additional field values keyed by field slug. Keys here override name and slug."
    )]
    #[serde(default)]
    pub field_data: Option<FieldData>,

    #[schemars(description = "Create the item as a draft (default: false)")]
    #[serde(default)]
    pub is_draft: bool,

    #[schemars(description = "Create the item as archived (default: false)")]
    #[serde(default)]
    pub is_archived: bool,
}

impl CreateCollectionItemParams {
    /// Build the request body for this call.
    pub fn payload(&self) -> CollectionItemPayload {
        CollectionItemPayload::new(
            &self.name,
            self.slug.as_deref(),
            self.field_data.clone(),
            self.is_draft,
            self.is_archived,
        )
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Creates an item in a collection.
pub struct CreateCollectionItemTool;

impl CreateCollectionItemTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_collection_item";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a new item in a Webflow CMS collection. The slug is derived from the name when not given.";

    #[instrument(skip_all, fields(collection_id = %params.collection_id))]
    pub async fn execute(
        client: &WebflowClient,
        params: CreateCollectionItemParams,
    ) -> WebflowResult<CallToolResult> {
        info!("Creating collection item '{}'", params.name);
        let item = client
            .create_collection_item(&params.collection_id, &params.payload())
            .await?;
        summary_result("Collection item created successfully", &item)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CreateCollectionItemParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
