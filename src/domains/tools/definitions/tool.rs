//! The shape every Search Console tool shares.
//!
//! A tool is a zero-sized type naming its parameters and an async `execute`
//! over the shared [`SearchConsoleClient`]. Metadata, the rmcp route and the
//! HTTP dispatch are derived from it here, so the per-tool files only carry
//! parameter structs and the call itself.

use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

use super::common::{api_error_result, output_result};
use crate::client::{ApiResult, SearchConsoleClient};
use crate::domains::tools::ToolError;

/// A tool bound to one Search Console operation.
pub trait ToolDefinition: Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Arguments, deserialized from the call's JSON object.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Perform the call. `Ok(None)` means the upstream answered with an
    /// empty body.
    fn execute(
        client: &SearchConsoleClient,
        params: Self::Params,
    ) -> impl Future<Output = ApiResult<Option<Value>>> + Send;
}

/// Create a Tool model for a definition (metadata).
pub fn to_tool<T: ToolDefinition>() -> Tool {
    Tool {
        name: T::NAME.into(),
        description: Some(T::DESCRIPTION.into()),
        input_schema: cached_schema_for_type::<T::Params>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Create a ToolRoute for STDIO/TCP transport.
pub fn create_route<T, S>(client: Arc<SearchConsoleClient>) -> ToolRoute<S>
where
    T: ToolDefinition,
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(to_tool::<T>(), move |ctx: ToolCallContext<'_, S>| {
        let client = client.clone();
        let args = ctx.arguments.clone();
        async move { dispatch::<T>(&client, args).await.map_err(McpError::from) }.boxed()
    })
}

/// Parse arguments, run the tool and shape the result.
///
/// Argument and local validation failures are returned as errors so the
/// caller sees `invalid_params`; upstream failures become error results.
pub async fn dispatch<T: ToolDefinition>(
    client: &SearchConsoleClient,
    arguments: Option<JsonObject>,
) -> Result<CallToolResult, ToolError> {
    let params: T::Params = serde_json::from_value(Value::Object(arguments.unwrap_or_default()))
        .map_err(|e| ToolError::invalid_arguments(format!("{}: {}", T::NAME, e)))?;

    info!("Calling tool {}", T::NAME);

    match T::execute(client, params).await {
        Ok(body) => Ok(output_result(body)),
        Err(e) if e.is_validation() => {
            warn!("{} rejected arguments: {}", T::NAME, e);
            Err(ToolError::invalid_arguments(format!("{}: {}", T::NAME, e)))
        }
        Err(e) => Ok(api_error_result(T::NAME, &e)),
    }
}
