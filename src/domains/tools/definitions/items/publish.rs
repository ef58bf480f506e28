//! Publish collection items tool definition.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::tools::definitions::common::summary_result;
use crate::domains::webflow::{WebflowClient, WebflowResult};

/// Parameters for the publish items tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublishCollectionItemsParams {
    #[schemars(description = "Unique identifier for the collection")]
    pub collection_id: String,

    #[schemars(description = "Identifiers of the items to publish")]
    pub item_ids: Vec<String>,
}

/// Publishes items of a collection.
pub struct PublishCollectionItemsTool;

impl PublishCollectionItemsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "publish_collection_items";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Publish one or more items of a Webflow CMS collection.";

    #[instrument(skip_all, fields(collection_id = %params.collection_id, count = params.item_ids.len()))]
    pub async fn execute(
        client: &WebflowClient,
        params: PublishCollectionItemsParams,
    ) -> WebflowResult<CallToolResult> {
        info!("Publishing collection items");
        let published = client
            .publish_collection_items(&params.collection_id, &params.item_ids)
            .await?;
        summary_result("Items published successfully", &published)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<PublishCollectionItemsParams>(),
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
    use serde_json::json;

    #[tokio::test]
    async fn test_publish_sends_item_ids() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/collections/c1/items/publish")
                    .json_body(json!({ "itemIds": ["a", "b"] }));
                then.status(202).json_body(json!({ "publishedItemIds": ["a", "b"] }));
            })
            .await;

        let params = PublishCollectionItemsParams {
            collection_id: "c1".to_string(),
            item_ids: vec!["a".to_string(), "b".to_string()],
        };
        let result = PublishCollectionItemsTool::execute(&mock_client(&server), params)
            .await
            .unwrap();
        mock.assert_async().await;
        assert!(first_text(&result).starts_with("Items published successfully:\n"));
    }
}
