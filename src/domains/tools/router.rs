//! Tool Router - builds the rmcp ToolRouter for the active tool set.
//!
//! This module builds the ToolRouter for STDIO/TCP transport. Every route
//! shares the same client; each tool's route is derived from its definition.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    create_route, google_search_console as search_console, google_searchconsole as searchconsole,
};
use crate::client::SearchConsoleClient;
use crate::core::config::AppKind;

/// Build the tool router for the configured app.
pub fn build_tool_router<S>(app: AppKind, client: Arc<SearchConsoleClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    match app {
        AppKind::GoogleSearchconsole => searchconsole_router(client),
        AppKind::GoogleSearchConsole => search_console_router(client),
    }
}

fn searchconsole_router<S>(client: Arc<SearchConsoleClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(create_route::<searchconsole::GetSitemapTool, S>(client.clone()))
        .with_route(create_route::<searchconsole::ListSitemapsTool, S>(client.clone()))
        .with_route(create_route::<searchconsole::SubmitSitemapTool, S>(client.clone()))
        .with_route(create_route::<searchconsole::DeleteSitemapTool, S>(client.clone()))
        .with_route(create_route::<searchconsole::GetSiteTool, S>(client.clone()))
        .with_route(create_route::<searchconsole::ListSitesTool, S>(client.clone()))
        .with_route(create_route::<searchconsole::AddSiteTool, S>(client.clone()))
        .with_route(create_route::<searchconsole::DeleteSiteTool, S>(client.clone()))
        .with_route(create_route::<searchconsole::IndexInspectUrlTool, S>(client.clone()))
        .with_route(create_route::<searchconsole::QuerySearchAnalyticsTool, S>(client))
}

fn search_console_router<S>(client: Arc<SearchConsoleClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(create_route::<search_console::ListSitesTool, S>(client.clone()))
        .with_route(create_route::<search_console::AddSiteTool, S>(client.clone()))
        .with_route(create_route::<search_console::DeleteSiteTool, S>(client.clone()))
        .with_route(create_route::<search_console::GetSiteTool, S>(client.clone()))
        .with_route(create_route::<search_console::QuerySearchAnalyticsTool, S>(client.clone()))
        .with_route(create_route::<search_console::InspectUrlTool, S>(client.clone()))
        .with_route(create_route::<search_console::ListSitemapsTool, S>(client.clone()))
        .with_route(create_route::<search_console::SubmitSitemapTool, S>(client.clone()))
        .with_route(create_route::<search_console::DeleteSitemapTool, S>(client.clone()))
        .with_route(create_route::<search_console::GetSitemapTool, S>(client))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::client::fake::{FakeBackend, fake_client};

    struct TestServer {}

    fn test_client() -> Arc<SearchConsoleClient> {
        Arc::new(fake_client(Arc::new(FakeBackend::new())))
    }

    #[test]
    fn test_build_searchconsole_router() {
        let router: ToolRouter<TestServer> =
            build_tool_router(AppKind::GoogleSearchconsole, test_client());
        let tools = router.list_all();
        assert_eq!(tools.len(), 10);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"index_inspect_url"));
        assert!(names.contains(&"query_search_analytics"));
        assert!(names.contains(&"list_sitemaps"));
        assert!(!names.contains(&"inspect_url"));
    }

    #[test]
    fn test_build_search_console_router() {
        let router: ToolRouter<TestServer> =
            build_tool_router(AppKind::GoogleSearchConsole, test_client());
        let tools = router.list_all();
        assert_eq!(tools.len(), 10);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"inspect_url"));
        assert!(names.contains(&"submit_sitemap"));
        assert!(!names.contains(&"index_inspect_url"));
    }

    #[test]
    fn test_input_schemas_follow_app_naming() {
        let camel: ToolRouter<TestServer> =
            build_tool_router(AppKind::GoogleSearchconsole, test_client());
        let snake: ToolRouter<TestServer> =
            build_tool_router(AppKind::GoogleSearchConsole, test_client());

        let property_names = |router: &ToolRouter<TestServer>, tool: &str| -> Vec<String> {
            router
                .list_all()
                .into_iter()
                .find(|t| t.name == tool)
                .and_then(|t| t.input_schema.get("properties").cloned())
                .and_then(|p| p.as_object().map(|o| o.keys().cloned().collect()))
                .unwrap_or_default()
        };

        let camel_props = property_names(&camel, "get_sitemap");
        assert!(camel_props.contains(&"siteUrl".to_string()));
        assert!(camel_props.contains(&"feedpath".to_string()));

        let snake_props = property_names(&snake, "get_sitemap");
        assert!(snake_props.contains(&"site_url".to_string()));
        assert!(snake_props.contains(&"feed_path".to_string()));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools for both apps
        for app in [AppKind::GoogleSearchconsole, AppKind::GoogleSearchConsole] {
            let client = test_client();
            let registry = ToolRegistry::new(app, client.clone());
            let registry_names = registry.tool_names();

            let router: ToolRouter<TestServer> = build_tool_router(app, client);
            let router_tools = router.list_all();
            let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

            assert_eq!(registry_names.len(), router_names.len());
            for name in registry_names {
                assert!(router_names.contains(&name), "{} missing for {}", name, app);
            }
        }
    }
}
