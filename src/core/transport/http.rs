//! HTTP transport implementation.
//!
//! JSON-RPC 2.0 over `POST {rpc_path}` so plain HTTP clients (curl, scripts,
//! browsers) can drive the Search Console tools without an MCP session.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;
use crate::domains::{prompts::PromptError, resources::ResourceError, tools::ToolError};

const DEFAULT_PROTOCOL_VERSION: &str = "2024-11-05";

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// JSON-RPC request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }

    /// Method not found error.
    pub fn method_not_found(id: Option<Value>) -> Self {
        Self::error(id, -32601, "Method not found")
    }

    /// Invalid request error.
    pub fn invalid_request(id: Option<Value>) -> Self {
        Self::error(id, -32600, "Invalid Request")
    }

    /// Invalid params error.
    pub fn invalid_params(id: Option<Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32602, msg)
    }

    /// Internal error.
    pub fn internal_error(id: Option<Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32603, msg)
    }

    /// MCP resource-not-found error.
    pub fn resource_not_found(id: Option<Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32002, msg)
    }
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    server: McpServer,
    rpc_path: String,
    session: Arc<RwLock<Option<SessionState>>>,
}

/// What the last `initialize` negotiated.
#[derive(Debug, Clone)]
struct SessionState {
    initialized: bool,
    protocol_version: String,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Build the axum router serving the JSON-RPC, health and info endpoints.
    pub fn router(&self, server: McpServer) -> Router {
        let state = AppState {
            server,
            rpc_path: self.config.rpc_path.clone(),
            session: Arc::new(RwLock::new(None)),
        };

        let app = Router::new()
            .route(&self.config.rpc_path, post(handle_rpc))
            .route("/health", get(health_check))
            .route("/", get(root_handler))
            .with_state(state);

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app.layer(cors)
        } else {
            app
        }
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = self.router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!(
            "Ready - listening on {} (JSON-RPC over HTTP, CORS {})",
            addr, cors_status
        );
        info!("  → JSON-RPC: POST {}", self.config.rpc_path);
        info!("  → Health:   GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Root handler - describes the server and its endpoints.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "app": state.server.app().as_str(),
        "transport": "HTTP",
        "endpoints": {
            "rpc": state.rpc_path,
            "health": "/health"
        },
        "protocol": "JSON-RPC 2.0",
        "documentation": format!("Send POST requests to {} with JSON-RPC messages", state.rpc_path)
    }))
}

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.session.read().await;
    Json(json!({
        "status": "healthy",
        "initialized": session.as_ref().is_some_and(|s| s.initialized),
        "protocolVersion": session.as_ref().map(|s| s.protocol_version.clone()),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Handle JSON-RPC requests.
#[instrument(skip_all, fields(method))]
async fn handle_rpc(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> impl IntoResponse {
    tracing::Span::current().record("method", &request.method);
    info!("Received JSON-RPC request: {}", request.method);

    let response = process_request(&state, request).await;

    (StatusCode::OK, Json(response))
}

/// Process a JSON-RPC request and return the response.
async fn process_request(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    if request.jsonrpc != "2.0" {
        return JsonRpcResponse::invalid_request(request.id);
    }

    match request.method.as_str() {
        "initialize" => handle_initialize(state, request).await,
        "ping" => JsonRpcResponse::success(request.id, json!({})),
        "tools/list" => handle_tools_list(state, request),
        "tools/call" => handle_tools_call(state, request).await,
        "resources/list" => handle_resources_list(state, request).await,
        "resources/templates/list" => handle_resources_templates_list(state, request).await,
        "resources/read" => handle_resources_read(state, request).await,
        "prompts/list" => handle_prompts_list(state, request).await,
        "prompts/get" => handle_prompts_get(state, request).await,

        // Stateless HTTP: acknowledge with a null result
        method if method.starts_with("notifications/") => {
            handle_notification(state, &request).await;
            JsonRpcResponse::success(request.id, Value::Null)
        }

        _ => {
            warn!("Unknown method: {}", request.method);
            JsonRpcResponse::method_not_found(request.id)
        }
    }
}

/// Handle initialize request.
async fn handle_initialize(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing initialize request");

    let protocol_version = request
        .params
        .as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_PROTOCOL_VERSION)
        .to_string();

    *state.session.write().await = Some(SessionState {
        initialized: false,
        protocol_version: protocol_version.clone(),
    });

    let result = json!({
        "protocolVersion": protocol_version,
        "capabilities": {
            "tools": {},
            "resources": {},
            "prompts": {}
        },
        "serverInfo": {
            "name": state.server.name(),
            "version": state.server.version()
        },
        "instructions": state.server.instructions()
    });

    JsonRpcResponse::success(request.id, result)
}

/// Handle tools/list request.
fn handle_tools_list(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing tools/list request");
    JsonRpcResponse::success(request.id, json!({ "tools": state.server.list_tools() }))
}

/// Handle tools/call request.
async fn handle_tools_call(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    let (name, params) = match named_params(&request, "tool") {
        Ok(found) => found,
        Err(response) => return response,
    };
    info!("Processing tools/call request: {}", name);

    let arguments = params.get("arguments").cloned().unwrap_or(Value::Null);

    match state.server.call_tool(&name, arguments).await {
        Ok(result) => JsonRpcResponse::success(request.id, result),
        Err(e @ ToolError::Internal(_)) => JsonRpcResponse::internal_error(request.id, e.to_string()),
        Err(e) => JsonRpcResponse::invalid_params(request.id, e.to_string()),
    }
}

/// Handle resources/list request.
async fn handle_resources_list(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing resources/list request");
    let resources = state.server.list_resources().await;
    JsonRpcResponse::success(request.id, json!({ "resources": resources }))
}

/// Handle resources/templates/list request.
async fn handle_resources_templates_list(
    state: &AppState,
    request: JsonRpcRequest,
) -> JsonRpcResponse {
    info!("Processing resources/templates/list request");
    let templates = state.server.list_resource_templates().await;
    JsonRpcResponse::success(request.id, json!({ "resourceTemplates": templates }))
}

/// Handle resources/read request.
async fn handle_resources_read(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    let uri = match request
        .params
        .as_ref()
        .and_then(|p| p.get("uri"))
        .and_then(Value::as_str)
    {
        Some(u) => u.to_string(),
        None => return JsonRpcResponse::invalid_params(request.id, "Missing resource URI"),
    };
    info!("Processing resources/read request: {}", uri);

    match state.server.read_resource(&uri).await {
        Ok(result) => JsonRpcResponse::success(request.id, result),
        Err(e @ ResourceError::NotFound(_)) => {
            JsonRpcResponse::resource_not_found(request.id, e.to_string())
        }
        Err(e) => JsonRpcResponse::internal_error(request.id, e.to_string()),
    }
}

/// Handle prompts/list request.
async fn handle_prompts_list(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing prompts/list request");
    let prompts = state.server.list_prompts().await;
    JsonRpcResponse::success(request.id, json!({ "prompts": prompts }))
}

/// Handle prompts/get request.
async fn handle_prompts_get(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    let (name, params) = match named_params(&request, "prompt") {
        Ok(found) => found,
        Err(response) => return response,
    };
    info!("Processing prompts/get request: {}", name);

    let arguments = params.get("arguments").cloned();

    match state.server.get_prompt(&name, arguments).await {
        Ok(result) => JsonRpcResponse::success(request.id, result),
        Err(e @ PromptError::TemplateError(_)) => {
            JsonRpcResponse::internal_error(request.id, e.to_string())
        }
        Err(e) => JsonRpcResponse::invalid_params(request.id, e.to_string()),
    }
}

/// Pull `params` and `params.name` out of a call, or the error response to send.
fn named_params<'a>(
    request: &'a JsonRpcRequest,
    kind: &str,
) -> Result<(String, &'a Value), JsonRpcResponse> {
    let params = request
        .params
        .as_ref()
        .ok_or_else(|| JsonRpcResponse::invalid_params(request.id.clone(), "Missing params"))?;

    let name = params.get("name").and_then(Value::as_str).ok_or_else(|| {
        JsonRpcResponse::invalid_params(request.id.clone(), format!("Missing {} name", kind))
    })?;

    Ok((name.to_string(), params))
}

/// Handle notifications (no response needed).
async fn handle_notification(state: &AppState, request: &JsonRpcRequest) {
    match request.method.as_str() {
        "notifications/initialized" => {
            info!("Client sent initialized notification");
            if let Some(session) = state.session.write().await.as_mut() {
                session.initialized = true;
            }
        }
        _ => {
            info!("Received notification: {}", request.method);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fake::{FAKE_SEARCHCONSOLE_URL, FAKE_WEBMASTERS_URL, FakeBackend};
    use crate::core::config::{AppKind, Config};
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn router(app: AppKind, backend: FakeBackend) -> Router {
        let mut config = Config::default();
        config.api.app = app;
        config.api.webmasters_base_url = FAKE_WEBMASTERS_URL.to_string();
        config.api.searchconsole_base_url = FAKE_SEARCHCONSOLE_URL.to_string();
        let server = McpServer::with_backend(config, Arc::new(backend));
        HttpTransport::new(HttpConfig::default()).router(server)
    }

    async fn rpc(router: Router, method: &str, params: Value) -> Value {
        let body = json!({"jsonrpc": "2.0", "id": 1, "method": method, "params": params});
        let response = router
            .oneshot(
                Request::post("/mcp")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_initialize_returns_instructions() {
        let response = rpc(
            router(AppKind::GoogleSearchconsole, FakeBackend::new()),
            "initialize",
            json!({"protocolVersion": "2025-03-26"}),
        )
        .await;

        assert_eq!(response["result"]["protocolVersion"], "2025-03-26");
        assert_eq!(response["result"]["serverInfo"]["name"], "search-console-mcp");
        assert!(
            response["result"]["instructions"]
                .as_str()
                .unwrap()
                .contains("siteUrl")
        );
    }

    #[tokio::test]
    async fn test_tools_list_and_call() {
        let router = router(
            AppKind::GoogleSearchconsole,
            FakeBackend::new().with_site("https://example.com/"),
        );

        let listed = rpc(router.clone(), "tools/list", json!({})).await;
        assert_eq!(listed["result"]["tools"].as_array().map(Vec::len), Some(10));

        let called = rpc(
            router,
            "tools/call",
            json!({"name": "get_site", "arguments": {"siteUrl": "https://example.com/"}}),
        )
        .await;
        assert_eq!(called["result"]["isError"], false);
        assert_eq!(
            called["result"]["structuredContent"]["siteUrl"],
            "https://example.com/"
        );
    }

    #[tokio::test]
    async fn test_tool_errors_map_to_invalid_params() {
        let router = router(AppKind::GoogleSearchConsole, FakeBackend::new());

        let unknown = rpc(router.clone(), "tools/call", json!({"name": "purge_site"})).await;
        assert_eq!(unknown["error"]["code"], -32602);

        let missing = rpc(router.clone(), "tools/call", json!({"name": "get_site"})).await;
        assert_eq!(missing["error"]["code"], -32602);

        let no_name = rpc(router, "tools/call", json!({})).await;
        assert_eq!(no_name["error"]["message"], "Missing tool name");
    }

    #[tokio::test]
    async fn test_resources_read_not_found() {
        let router = router(AppKind::GoogleSearchconsole, FakeBackend::new());

        let found = rpc(
            router.clone(),
            "resources/read",
            json!({"uri": "gsc://operations/sites.get"}),
        )
        .await;
        assert!(found["result"]["contents"][0]["text"].is_string());

        let missing = rpc(router, "resources/read", json!({"uri": "gsc://operations/x"})).await;
        assert_eq!(missing["error"]["code"], -32002);
    }

    #[tokio::test]
    async fn test_prompts_get_missing_argument() {
        let router = router(AppKind::GoogleSearchconsole, FakeBackend::new());
        let response = rpc(
            router,
            "prompts/get",
            json!({"name": "indexing_check", "arguments": {"site_url": "https://example.com/"}}),
        )
        .await;
        assert_eq!(response["error"]["code"], -32602);
        assert!(
            response["error"]["message"]
                .as_str()
                .unwrap()
                .contains("urls")
        );
    }

    #[tokio::test]
    async fn test_unknown_method_and_bad_version() {
        let router = router(AppKind::GoogleSearchconsole, FakeBackend::new());
        let response = rpc(router.clone(), "sites/purge", json!({})).await;
        assert_eq!(response["error"]["code"], -32601);

        let response = process_request(
            &AppState {
                server: McpServer::with_backend(Config::default(), Arc::new(FakeBackend::new())),
                rpc_path: "/mcp".to_string(),
                session: Arc::new(RwLock::new(None)),
            },
            JsonRpcRequest {
                jsonrpc: "1.0".to_string(),
                id: Some(json!(7)),
                method: "ping".to_string(),
                params: None,
            },
        )
        .await;
        assert_eq!(response.error.map(|e| e.code), Some(-32600));
    }

    #[tokio::test]
    async fn test_root_and_health() {
        let router = router(AppKind::GoogleSearchConsole, FakeBackend::new());

        let response = router
            .clone()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let root: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(root["app"], "google_search_console");
        assert_eq!(root["endpoints"]["rpc"], "/mcp");

        let response = router
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let health: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(health["status"], "healthy");
        assert_eq!(health["initialized"], false);
    }
}
