//! List collections tool definition.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::tools::definitions::common::json_result;
use crate::domains::webflow::{WebflowClient, WebflowResult};

/// Parameters for the list collections tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetCollectionsParams {
    #[schemars(description = "Unique identifier for the site")]
    pub site_id: String,
}

/// Lists the CMS collections of a site.
pub struct GetCollectionsTool;

impl GetCollectionsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_collections";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Retrieve a list of all CMS collections for a specific Webflow site.";

    #[instrument(skip_all, fields(site_id = %params.site_id))]
    pub async fn execute(
        client: &WebflowClient,
        params: GetCollectionsParams,
    ) -> WebflowResult<CallToolResult> {
        info!("Listing collections");
        let collections = client.list_collections(&params.site_id).await?;
        json_result(&collections)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetCollectionsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
