//! List collection items tool definition.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::tools::definitions::common::{default_limit, json_result};
use crate::domains::webflow::{Pagination, WebflowClient, WebflowResult};

/// Parameters for the list items tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetCollectionItemsParams {
    #[schemars(description = "Unique identifier for the collection")]
    pub collection_id: String,

    /// Maximum number of items to return.
    ///
    /// Must be a JSON integer in `0..=u32::MAX`; integral floats such as
    /// `10.0` are rejected rather than truncated.
    #[schemars(description = "Maximum number of items to return (default: 10)")]
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Number of items to skip. Same integer rules as `limit`.
    #[schemars(description = "Number of items to skip for pagination (default: 0)")]
    #[serde(default)]
    pub offset: u32,
}

/// Lists items of a collection, one page at a time.
pub struct GetCollectionItemsTool;

impl GetCollectionItemsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_collection_items";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Retrieve items from a Webflow CMS collection, with optional pagination through limit and offset.";

    #[instrument(skip_all, fields(collection_id = %params.collection_id))]
    pub async fn execute(
        client: &WebflowClient,
        params: GetCollectionItemsParams,
    ) -> WebflowResult<CallToolResult> {
        info!(
            "Listing collection items (limit={}, offset={})",
            params.limit, params.offset
        );
        let page = Pagination {
            limit: params.limit,
            offset: params.offset,
        };
        let items = client
            .list_collection_items(&params.collection_id, page)
            .await?;
        json_result(&items)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetCollectionItemsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
