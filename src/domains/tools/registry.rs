//! Tool Registry - central dispatch for all tools.
//!
//! Resolves a tool name to a [`ToolName`], validates the raw arguments into
//! that tool's parameter struct and runs it against the Webflow client.

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::{info, warn};

use super::catalog::{ToolName, catalog};
use super::definitions::{
    CreateCollectionItemTool, DeleteCollectionItemTool, GetCollectionItemsTool,
    GetCollectionsTool, GetSiteTool, GetSitesTool, PublishCollectionItemsTool,
    UpdateCollectionItemTool,
};
use super::error::ToolError;
use super::validation::parse_arguments;
use crate::domains::webflow::WebflowClient;

/// Tool registry - dispatches tool calls to the Webflow client.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    client: WebflowClient,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(client: WebflowClient) -> Self {
        Self { client }
    }

    /// Get all tools as Tool models (metadata).
    pub fn list_tools(&self) -> Vec<Tool> {
        catalog()
    }

    /// Dispatch a tool call.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        let tool = name.parse::<ToolName>().inspect_err(|_| {
            warn!("Unknown tool requested: {}", name);
        })?;
        info!("Calling tool: {}", tool);

        let client = &self.client;
        let result = match tool {
            ToolName::GetSites => GetSitesTool::execute(client).await,
            ToolName::GetSite => GetSiteTool::execute(client, parse_arguments(arguments)?).await,
            ToolName::GetCollections => {
                GetCollectionsTool::execute(client, parse_arguments(arguments)?).await
            }
            ToolName::GetCollectionItems => {
                GetCollectionItemsTool::execute(client, parse_arguments(arguments)?).await
            }
            ToolName::CreateCollectionItem => {
                CreateCollectionItemTool::execute(client, parse_arguments(arguments)?).await
            }
            ToolName::UpdateCollectionItem => {
                UpdateCollectionItemTool::execute(client, parse_arguments(arguments)?).await
            }
            ToolName::DeleteCollectionItem => {
                DeleteCollectionItemTool::execute(client, parse_arguments(arguments)?).await
            }
            ToolName::PublishCollectionItems => {
                PublishCollectionItemsTool::execute(client, parse_arguments(arguments)?).await
            }
        };

        result.map_err(|e| ToolError::execution_failed(tool.as_str(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::{first_text, mock_client};
    use httpmock::prelude::*;
    use rmcp::{ErrorData as McpError, model::ErrorCode};
    use serde_json::{Value, json};

    fn args(value: Value) -> Option<JsonObject> {
        value.as_object().cloned()
    }

    fn offline_registry() -> ToolRegistry {
        let config =
            crate::core::config::WebflowConfig::new("t").with_base_url("http://127.0.0.1:9");
        ToolRegistry::new(WebflowClient::new(&config).unwrap())
    }

    #[test]
    fn test_registry_tool_names() {
        let names: Vec<&str> = ToolName::ALL.iter().map(|tool| tool.as_str()).collect();
        assert_eq!(names.len(), 8);
        let listed: Vec<String> = offline_registry()
            .list_tools()
            .iter()
            .map(|t| t.name.to_string())
            .collect();
        assert_eq!(names, listed);
    }

    #[tokio::test]
    async fn test_unknown_tool_is_method_not_found() {
        let err = offline_registry()
            .call_tool("drop_database", None)
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));

        let mcp: McpError = err.into();
        assert_eq!(mcp.code.0, ErrorCode::METHOD_NOT_FOUND.0);
    }

    #[tokio::test]
    async fn test_missing_site_id_is_invalid_params() {
        let err = offline_registry()
            .call_tool("get_site", None)
            .await
            .unwrap_err();
        let mcp: McpError = err.into();
        assert_eq!(mcp.code.0, ErrorCode::INVALID_PARAMS.0);
        assert!(mcp.message.contains("siteId"));
    }

    #[tokio::test]
    async fn test_all_failing_fields_are_reported() {
        let err = offline_registry()
            .call_tool(
                "create_collection_item",
                args(json!({ "isDraft": "nope" })),
            )
            .await
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("collectionId: Required"));
        assert!(msg.contains("name: Required"));
        assert!(msg.contains("isDraft: Expected boolean, received string"));
    }

    #[tokio::test]
    async fn test_get_sites_skips_validation() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/sites");
                then.status(200).json_body(json!({ "sites": [] }));
            })
            .await;

        let registry = ToolRegistry::new(mock_client(&server));
        registry
            .call_tool("get_sites", args(json!({ "unexpected": 1 })))
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_remote_404_is_internal_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/sites/missing");
                then.status(404).body("Not Found");
            })
            .await;

        let registry = ToolRegistry::new(mock_client(&server));
        let err = registry
            .call_tool("get_site", args(json!({ "siteId": "missing" })))
            .await
            .unwrap_err();
        let mcp: McpError = err.into();
        assert_eq!(mcp.code.0, ErrorCode::INTERNAL_ERROR.0);
        assert!(mcp.message.contains("get_site"));
        assert!(mcp.message.contains("404"));
        assert!(mcp.message.contains("Not Found"));
    }

    #[tokio::test]
    async fn test_list_items_defaults_paging() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/collections/c1/items")
                    .query_param("limit", "10")
                    .query_param("offset", "0");
                then.status(200).json_body(json!({ "items": [] }));
            })
            .await;

        let registry = ToolRegistry::new(mock_client(&server));
        registry
            .call_tool("get_collection_items", args(json!({ "collectionId": "c1" })))
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_derives_slug_end_to_end() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/collections/c1/items").json_body(json!({
                    "fieldData": { "name": "Hello World!", "slug": "hello-world" },
                    "isDraft": false,
                    "isArchived": false
                }));
                then.status(202).json_body(json!({ "id": "i1" }));
            })
            .await;

        let registry = ToolRegistry::new(mock_client(&server));
        registry
            .call_tool(
                "create_collection_item",
                args(json!({ "collectionId": "c1", "name": "Hello World!" })),
            )
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_field_data_slug_wins_end_to_end() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/collections/c1/items").json_body(json!({
                    "fieldData": { "name": "Foo", "slug": "custom" },
                    "isDraft": false,
                    "isArchived": false
                }));
                then.status(202).json_body(json!({ "id": "i1" }));
            })
            .await;

        let registry = ToolRegistry::new(mock_client(&server));
        registry
            .call_tool(
                "create_collection_item",
                args(json!({ "collectionId": "c1", "name": "Foo", "fieldData": { "slug": "custom" } })),
            )
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_with_ids_only_sends_no_optional_keys() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(httpmock::Method::PATCH)
                    .path("/collections/c1/items/i1")
                    .json_body(json!({}));
                then.status(200).json_body(json!({ "id": "i1" }));
            })
            .await;

        let registry = ToolRegistry::new(mock_client(&server));
        registry
            .call_tool(
                "update_collection_item",
                args(json!({ "collectionId": "c1", "itemId": "i1" })),
            )
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_accepts_null_for_optional_flag() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(httpmock::Method::PATCH)
                    .path("/collections/c1/items/i1")
                    .json_body(json!({}));
                then.status(200).json_body(json!({ "id": "i1" }));
            })
            .await;

        let registry = ToolRegistry::new(mock_client(&server));
        registry
            .call_tool(
                "update_collection_item",
                args(json!({ "collectionId": "c1", "itemId": "i1", "isDraft": null })),
            )
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_limit_beyond_u32_names_the_field() {
        let err = offline_registry()
            .call_tool(
                "get_collection_items",
                args(json!({ "collectionId": "c1", "limit": 5_000_000_000u64 })),
            )
            .await
            .unwrap_err();
        let mcp: McpError = err.into();
        assert_eq!(mcp.code.0, ErrorCode::INVALID_PARAMS.0);
        assert!(
            mcp.message
                .contains("limit: Number must be less than or equal to 4294967295")
        );
    }

    #[tokio::test]
    async fn test_fractional_limit_is_rejected() {
        let err = offline_registry()
            .call_tool(
                "get_collection_items",
                args(json!({ "collectionId": "c1", "limit": 10.0 })),
            )
            .await
            .unwrap_err();
        assert!(
            err.to_string()
                .contains("limit: Expected integer, received number")
        );
    }

    #[tokio::test]
    async fn test_delete_names_deleted_item() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(DELETE).path("/collections/c1/items/i1");
                then.status(204);
            })
            .await;

        let registry = ToolRegistry::new(mock_client(&server));
        let result = registry
            .call_tool(
                "delete_collection_item",
                args(json!({ "collectionId": "c1", "itemId": "i1" })),
            )
            .await
            .unwrap();
        assert_eq!(first_text(&result), "Collection item i1 deleted successfully");
    }

    #[tokio::test]
    async fn test_publish_rejects_non_string_ids() {
        let err = offline_registry()
            .call_tool(
                "publish_collection_items",
                args(json!({ "collectionId": "c1", "itemIds": ["a", 7] })),
            )
            .await
            .unwrap_err();
        assert!(err.to_string().contains("itemIds.1"));
    }
}
