use gnews_core::ToolError;

use super::{CallToolResult, Content, JsonRpcError};
use crate::client::NewsApi;

/// Run `search_news` or `get_top_headlines` and wrap the result for MCP.
pub async fn handle_news_tool(
    name: &str,
    arguments: Option<serde_json::Value>,
    api: &dyn NewsApi,
) -> Result<serde_json::Value, JsonRpcError> {
    log::debug!("Calling {name}: arguments={arguments:?}");

    let output = crate::dispatch::invoke(api, name, arguments.as_ref())
        .await
        .map_err(tool_error)?;

    // Convert to JSON and wrap in MCP result format
    let json_string = serde_json::to_string_pretty(&output).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Serialization error: {e}"),
        data: None,
    })?;

    let result = CallToolResult {
        content: vec![Content::Text { text: json_string }],
        structured_content: serde_json::to_value(&output).ok(),
        is_error: None,
    };

    serde_json::to_value(result).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Internal error: {e}"),
        data: None,
    })
}

/// Caller faults map to "invalid params", everything else to "internal error".
/// `data` carries the kind tag and, for upstream errors, the HTTP status.
fn tool_error(err: ToolError) -> JsonRpcError {
    let code = match err {
        ToolError::Validation { .. } => -32602,
        ToolError::Upstream { .. } | ToolError::Network { .. } => -32603,
    };

    JsonRpcError {
        code,
        message: err.to_string(),
        data: serde_json::to_value(&err).ok(),
    }
}
