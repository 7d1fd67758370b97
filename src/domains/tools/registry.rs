//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The tool names of each app
//! - HTTP dispatch for tool calls (when http feature is enabled)

use std::sync::Arc;

#[cfg(feature = "http")]
use rmcp::model::CallToolResult;
#[cfg(feature = "http")]
use tracing::warn;

#[cfg(feature = "http")]
use super::ToolError;
#[cfg(feature = "http")]
use super::definitions::{common::result_to_json, dispatch};
use super::definitions::{
    ToolDefinition, google_search_console as search_console, google_searchconsole as searchconsole,
};
use crate::client::SearchConsoleClient;
use crate::core::config::AppKind;

/// Tool registry - the active app's tools over a shared client.
#[derive(Clone)]
pub struct ToolRegistry {
    app: AppKind,
    client: Arc<SearchConsoleClient>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(app: AppKind, client: Arc<SearchConsoleClient>) -> Self {
        Self { app, client }
    }

    /// The app whose tools this registry serves.
    pub fn app(&self) -> AppKind {
        self.app
    }

    /// Get all tool names of the active app.
    pub fn tool_names(&self) -> Vec<&'static str> {
        match self.app {
            AppKind::GoogleSearchconsole => vec![
                searchconsole::GetSitemapTool::NAME,
                searchconsole::ListSitemapsTool::NAME,
                searchconsole::SubmitSitemapTool::NAME,
                searchconsole::DeleteSitemapTool::NAME,
                searchconsole::GetSiteTool::NAME,
                searchconsole::ListSitesTool::NAME,
                searchconsole::AddSiteTool::NAME,
                searchconsole::DeleteSiteTool::NAME,
                searchconsole::IndexInspectUrlTool::NAME,
                searchconsole::QuerySearchAnalyticsTool::NAME,
            ],
            AppKind::GoogleSearchConsole => vec![
                search_console::ListSitesTool::NAME,
                search_console::AddSiteTool::NAME,
                search_console::DeleteSiteTool::NAME,
                search_console::GetSiteTool::NAME,
                search_console::QuerySearchAnalyticsTool::NAME,
                search_console::InspectUrlTool::NAME,
                search_console::ListSitemapsTool::NAME,
                search_console::SubmitSitemapTool::NAME,
                search_console::DeleteSitemapTool::NAME,
                search_console::GetSitemapTool::NAME,
            ],
        }
    }

    /// Dispatch an HTTP tool call to the appropriate tool.
    ///
    /// Returns the JSON-RPC `result` payload. Upstream failures are part of
    /// that payload (`isError`); only unknown tools and bad arguments are
    /// errors here.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let arguments = match arguments {
            serde_json::Value::Object(map) => Some(map),
            serde_json::Value::Null => None,
            other => {
                return Err(ToolError::invalid_arguments(format!(
                    "Arguments must be an object, got {}",
                    other
                )));
            }
        };

        let result = match self.app {
            AppKind::GoogleSearchconsole => self.call_searchconsole(name, arguments).await,
            AppKind::GoogleSearchConsole => self.call_search_console(name, arguments).await,
        };

        if let Err(ToolError::NotFound(_)) = &result {
            warn!("Unknown tool requested: {}", name);
        }
        result_to_json(result?)
    }

    #[cfg(feature = "http")]
    async fn call_searchconsole(
        &self,
        name: &str,
        arguments: Option<rmcp::model::JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        use searchconsole::*;

        let client = &self.client;
        match name {
            GetSitemapTool::NAME => dispatch::<GetSitemapTool>(client, arguments).await,
            ListSitemapsTool::NAME => dispatch::<ListSitemapsTool>(client, arguments).await,
            SubmitSitemapTool::NAME => dispatch::<SubmitSitemapTool>(client, arguments).await,
            DeleteSitemapTool::NAME => dispatch::<DeleteSitemapTool>(client, arguments).await,
            GetSiteTool::NAME => dispatch::<GetSiteTool>(client, arguments).await,
            ListSitesTool::NAME => dispatch::<ListSitesTool>(client, arguments).await,
            AddSiteTool::NAME => dispatch::<AddSiteTool>(client, arguments).await,
            DeleteSiteTool::NAME => dispatch::<DeleteSiteTool>(client, arguments).await,
            IndexInspectUrlTool::NAME => dispatch::<IndexInspectUrlTool>(client, arguments).await,
            QuerySearchAnalyticsTool::NAME => {
                dispatch::<QuerySearchAnalyticsTool>(client, arguments).await
            }
            _ => Err(ToolError::not_found(name)),
        }
    }

    #[cfg(feature = "http")]
    async fn call_search_console(
        &self,
        name: &str,
        arguments: Option<rmcp::model::JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        use search_console::*;

        let client = &self.client;
        match name {
            ListSitesTool::NAME => dispatch::<ListSitesTool>(client, arguments).await,
            AddSiteTool::NAME => dispatch::<AddSiteTool>(client, arguments).await,
            DeleteSiteTool::NAME => dispatch::<DeleteSiteTool>(client, arguments).await,
            GetSiteTool::NAME => dispatch::<GetSiteTool>(client, arguments).await,
            QuerySearchAnalyticsTool::NAME => {
                dispatch::<QuerySearchAnalyticsTool>(client, arguments).await
            }
            InspectUrlTool::NAME => dispatch::<InspectUrlTool>(client, arguments).await,
            ListSitemapsTool::NAME => dispatch::<ListSitemapsTool>(client, arguments).await,
            SubmitSitemapTool::NAME => dispatch::<SubmitSitemapTool>(client, arguments).await,
            DeleteSitemapTool::NAME => dispatch::<DeleteSitemapTool>(client, arguments).await,
            GetSitemapTool::NAME => dispatch::<GetSitemapTool>(client, arguments).await,
            _ => Err(ToolError::not_found(name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fake::{FakeBackend, fake_client};

    fn registry(app: AppKind, backend: FakeBackend) -> ToolRegistry {
        ToolRegistry::new(app, Arc::new(fake_client(Arc::new(backend))))
    }

    #[test]
    fn test_registry_tool_names() {
        let names = registry(AppKind::GoogleSearchconsole, FakeBackend::new()).tool_names();
        assert_eq!(names.len(), 10);
        for name in [
            "get_sitemap",
            "list_sitemaps",
            "submit_sitemap",
            "delete_sitemap",
            "get_site",
            "list_sites",
            "add_site",
            "delete_site",
            "index_inspect_url",
            "query_search_analytics",
        ] {
            assert!(names.contains(&name), "missing {}", name);
        }

        let names = registry(AppKind::GoogleSearchConsole, FakeBackend::new()).tool_names();
        assert_eq!(names.len(), 10);
        assert!(names.contains(&"inspect_url"));
        assert!(!names.contains(&"index_inspect_url"));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_list_sites() {
        let registry = registry(
            AppKind::GoogleSearchConsole,
            FakeBackend::new().with_site("https://example.com/"),
        );
        let result = registry
            .call_tool("list_sites", serde_json::json!({}))
            .await
            .unwrap();
        assert_eq!(result["isError"], false);
        assert_eq!(
            result["structuredContent"]["siteEntry"][0]["siteUrl"],
            "https://example.com/"
        );
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_unknown() {
        let registry = registry(AppKind::GoogleSearchconsole, FakeBackend::new());
        let result = registry.call_tool("inspect_url", serde_json::json!({})).await;
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_rejects_non_object_arguments() {
        let registry = registry(AppKind::GoogleSearchconsole, FakeBackend::new());
        let result = registry.call_tool("list_sites", serde_json::json!([1, 2])).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_upstream_error_is_result() {
        let registry = registry(
            AppKind::GoogleSearchconsole,
            FakeBackend::new().fail_with(503, "Backend Error"),
        );
        let result = registry
            .call_tool("list_sites", serde_json::json!({}))
            .await
            .unwrap();
        assert_eq!(result["isError"], true);
        assert_eq!(result["structuredContent"]["kind"], "server");
    }
}
