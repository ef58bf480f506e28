//! Common utilities shared across the Webflow tools.

use rmcp::model::{CallToolResult, Content};
use serde_json::Value;

use crate::domains::webflow::WebflowResult;

/// Default page size for item listings.
pub fn default_limit() -> u32 {
    10
}

/// Wrap an API response as pretty-printed JSON text.
pub fn json_result(response: &Value) -> WebflowResult<CallToolResult> {
    let text = serde_json::to_string_pretty(response)?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Wrap an API response as pretty-printed JSON preceded by a summary line.
pub fn summary_result(summary: &str, response: &Value) -> WebflowResult<CallToolResult> {
    let text = format!("{}:\n{}", summary, serde_json::to_string_pretty(response)?);
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Plain text result.
pub fn text_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Extract the text of the first content block.
#[cfg(test)]
pub fn first_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}

/// Client pointed at a mock server.
#[cfg(test)]
pub fn mock_client(server: &httpmock::MockServer) -> crate::domains::webflow::WebflowClient {
    let config = crate::core::config::WebflowConfig::new("test-token").with_base_url(server.base_url());
    crate::domains::webflow::WebflowClient::new(&config).unwrap()
}
