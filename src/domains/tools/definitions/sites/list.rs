//! List sites tool definition.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::tools::definitions::common::json_result;
use crate::domains::webflow::{WebflowClient, WebflowResult};

/// The tool takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetSitesParams {}

/// Lists every site the token can access.
pub struct GetSitesTool;

impl GetSitesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_sites";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Retrieve a list of all Webflow sites accessible with the configured API token.";

    pub async fn execute(client: &WebflowClient) -> WebflowResult<CallToolResult> {
        info!("Listing sites");
        let sites = client.list_sites().await?;
        json_result(&sites)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetSitesParams>(),
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
    async fn test_get_sites_pretty_prints_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/sites");
                then.status(200)
                    .json_body(json!({ "sites": [{ "id": "s1", "displayName": "Blog" }] }));
            })
            .await;

        let result = GetSitesTool::execute(&mock_client(&server)).await.unwrap();
        let text = first_text(&result);
        let parsed: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(parsed["sites"][0]["id"], "s1");
        assert!(text.contains('\n'));
    }

    #[test]
    fn test_schema_has_no_required_fields() {
        let tool = GetSitesTool::to_tool();
        assert!(tool.input_schema.get("required").is_none());
    }
}
