//! Delete collection item tool definition.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::tools::definitions::common::text_result;
use crate::domains::webflow::{WebflowClient, WebflowResult};

/// Parameters for the delete item tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCollectionItemParams {
    #[schemars(description = "Unique identifier for the collection")]
    pub collection_id: String,

    #[schemars(description = "Unique identifier for the item to delete")]
    pub item_id: String,
}

/// Deletes an item.
pub struct DeleteCollectionItemTool;

impl DeleteCollectionItemTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "delete_collection_item";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Delete an item from a Webflow CMS collection.";

    /// The API's response body is not echoed back; the result names the
    /// deleted item instead.
    #[instrument(skip_all, fields(collection_id = %params.collection_id, item_id = %params.item_id))]
    pub async fn execute(
        client: &WebflowClient,
        params: DeleteCollectionItemParams,
    ) -> WebflowResult<CallToolResult> {
        info!("Deleting collection item");
        client
            .delete_collection_item(&params.collection_id, &params.item_id)
            .await?;
        Ok(text_result(format!(
            "Collection item {} deleted successfully",
            params.item_id
        )))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<DeleteCollectionItemParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::{first_text, mock_client};
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_delete_reports_item_id() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/collections/c1/items/i42");
                then.status(204);
            })
            .await;

        let params = DeleteCollectionItemParams {
            collection_id: "c1".to_string(),
            item_id: "i42".to_string(),
        };
        let result = DeleteCollectionItemTool::execute(&mock_client(&server), params)
            .await
            .unwrap();
        mock.assert_async().await;
        assert_eq!(first_text(&result), "Collection item i42 deleted successfully");
    }
}
