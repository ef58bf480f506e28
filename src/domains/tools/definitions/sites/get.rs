//! Get site tool definition.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::tools::definitions::common::json_result;
use crate::domains::webflow::{WebflowClient, WebflowResult};

/// Parameters for the get site tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetSiteParams {
    /// Unique identifier of the site.
    #[schemars(description = "Unique identifier for the site")]
    pub site_id: String,
}

/// Fetches a single site.
pub struct GetSiteTool;

impl GetSiteTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_site";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Retrieve detailed information about a specific Webflow site by ID, including workspace, creation date, display name, and publishing details.";

    #[instrument(skip_all, fields(site_id = %params.site_id))]
    pub async fn execute(
        client: &WebflowClient,
        params: GetSiteParams,
    ) -> WebflowResult<CallToolResult> {
        info!("Fetching site");
        let site = client.get_site(&params.site_id).await?;
        json_result(&site)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetSiteParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
