//! Common utilities shared across Search Console tools.
//!
//! Result formatting for both transports and the confirmation object the
//! `google_search_console` tools return for side effects.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::warn;

use crate::client::{ApiError, ApiResult};
use crate::domains::tools::ToolError;

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result carrying both a JSON text rendering and the
/// value itself as structured content.
pub fn structured_result(data: Value) -> CallToolResult {
    let text = serde_json::to_string_pretty(&data).unwrap_or_else(|_| data.to_string());
    CallToolResult {
        content: vec![Content::text(text)],
        structured_content: Some(data),
        is_error: Some(false),
        meta: None,
    }
}

/// Shape a tool's output. An empty upstream body yields an empty success.
pub fn output_result(body: Option<Value>) -> CallToolResult {
    match body {
        Some(data) => structured_result(data),
        None => CallToolResult::success(vec![]),
    }
}

/// Report an upstream failure as `{tool, kind, status?, message}`.
pub fn api_error_result(tool: &str, error: &ApiError) -> CallToolResult {
    let mut details = json!({
        "tool": tool,
        "kind": error.kind(),
        "message": error.to_string(),
    });
    if let (Some(status), Some(map)) = (error.status(), details.as_object_mut()) {
        map.insert("status".to_string(), json!(status));
    }

    let mut result = error_result(&format!("{} failed: {}", tool, error));
    result.structured_content = Some(details);
    result
}

/// Serialize a typed response into the pass-through JSON value.
pub fn to_body<T: Serialize>(value: &T) -> ApiResult<Option<Value>> {
    Ok(Some(serde_json::to_value(value)?))
}

/// `{"status": "success", "message": ...}`
pub fn confirmation(message: String) -> Option<Value> {
    Some(json!({ "status": "success", "message": message }))
}

/// Convert a tool result into the JSON-RPC `result` payload.
pub fn result_to_json(result: CallToolResult) -> Result<Value, ToolError> {
    serde_json::to_value(&result)
        .map_err(|e| ToolError::internal(format!("Failed to serialize tool result: {}", e)))
}
