mod cli;
mod sse;
mod stdio;
mod tools;

pub use cli::App;

use crate::client::{NewsApi, NewsClient};
use crate::config::GnewsConfig;
use crate::prelude::*;
use serde::{Deserialize, Serialize};

// JSON-RPC 2.0 types
#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    #[allow(dead_code)]
    jsonrpc: String,
    id: Option<serde_json::Value>,
    method: String,
    params: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    jsonrpc: String,
    id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

// MCP Protocol types
#[derive(Debug, Serialize)]
pub struct Tool {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
    #[serde(rename = "outputSchema")]
    pub output_schema: serde_json::Value,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let config = GnewsConfig::from_global(&global)?;
    log::debug!("Using GNews API at {}", config.base_url);
    let client = NewsClient::new(config)?;

    match app.command {
        cli::Commands::Stdio => stdio::run_stdio(client).await,
        cli::Commands::Sse(options) => sse::run_sse(options, client).await,
    }
}

/// Handle one JSON-RPC message.
///
/// Notifications (no `id`, `notifications/*` method) get no response.
pub async fn handle_request(request_str: &str, api: &dyn NewsApi) -> Option<JsonRpcResponse> {
    let request: JsonRpcRequest = match serde_json::from_str(request_str) {
        Ok(req) => req,
        Err(e) => {
            return Some(JsonRpcResponse {
                jsonrpc: "2.0".to_string(),
                id: None,
                result: None,
                error: Some(JsonRpcError {
                    code: -32700,
                    message: format!("Parse error: {e}"),
                    data: None,
                }),
            });
        }
    };

    if request.id.is_none() && request.method.starts_with("notifications/") {
        log::debug!("Notification: {}", request.method);
        return None;
    }

    let result = match request.method.as_str() {
        "initialize" => tools::handle_initialize(),
        "ping" => Ok(serde_json::json!({})),
        "tools/list" => tools::handle_tools_list(),
        "tools/call" => tools::handle_tools_call(request.params, api).await,
        method => Err(JsonRpcError {
            code: -32601,
            message: format!("Method not found: {method}"),
            data: None,
        }),
    };

    Some(match result {
        Ok(value) => JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id,
            result: Some(value),
            error: None,
        },
        Err(error) => JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id,
            result: None,
            error: Some(error),
        },
    })
}
