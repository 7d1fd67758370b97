//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access.
//! It maintains a registry of available resources and handles read requests,
//! including URIs matching the operation template.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new resource does NOT require modifying this file.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

use super::definitions::{ServerSummary, operation_by_uri};
use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};
use crate::client::ALL_OPERATIONS;

/// Service for managing and accessing resources.
///
/// This service maintains a registry of available resources and handles
/// resource listing and reading operations.
pub struct ResourceService {
    /// Snapshot reported by `gsc://server/info`.
    summary: ServerSummary,

    /// Registry of available resources.
    /// Key: resource URI, Value: resource metadata
    resources: BTreeMap<String, ResourceEntry>,

    /// Resource templates for parameterized resources.
    templates: Vec<ResourceTemplate>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Static text content.
    Text(String),

    /// Dynamic content that requires computation.
    Dynamic(DynamicResourceType),
}

/// Types of dynamic resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicResourceType {
    /// Server and configuration summary.
    ServerInfo,

    /// Every operation descriptor.
    OperationsCatalog,
}

impl ResourceService {
    /// Create a new ResourceService reporting the given summary.
    pub fn new(summary: ServerSummary) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            summary,
            resources: BTreeMap::new(),
            templates: Vec::new(),
        };

        // Register all resources and templates from registry
        for entry in get_all_resources() {
            service.register_resource(entry);
        }
        service.templates = get_all_resource_templates();

        service
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        debug!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    ///
    /// Registered URIs are served first; anything else is matched against
    /// the `gsc://operations/{id}` template.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let content = match self.resources.get(uri) {
            Some(entry) => match &entry.content {
                ResourceContent::Text(text) => ResourceContents::text(text, uri),
                ResourceContent::Dynamic(dynamic_type) => {
                    self.resolve_dynamic_content(uri, *dynamic_type)?
                }
            },
            None => {
                let operation =
                    operation_by_uri(uri).ok_or_else(|| ResourceError::not_found(uri))?;
                json_contents(uri, operation)?
            }
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }

    /// Resolve dynamic resource content.
    fn resolve_dynamic_content(
        &self,
        uri: &str,
        dynamic_type: DynamicResourceType,
    ) -> Result<ResourceContents, ResourceError> {
        match dynamic_type {
            DynamicResourceType::ServerInfo => json_contents(uri, &self.summary),
            DynamicResourceType::OperationsCatalog => json_contents(
                uri,
                &serde_json::json!({
                    "count": ALL_OPERATIONS.len(),
                    "operations": ALL_OPERATIONS,
                }),
            ),
        }
    }
}

fn json_contents<T: Serialize + ?Sized>(
    uri: &str,
    value: &T,
) -> Result<ResourceContents, ResourceError> {
    Ok(ResourceContents::text(serde_json::to_string_pretty(value)?, uri))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;

    fn service() -> ResourceService {
        let mut config = Config::default();
        config.credentials.access_token = Some("ya29.secret".to_string());
        ResourceService::new(ServerSummary::new(&config, vec!["list_sites", "get_site"]))
    }

    fn text_of(result: &ReadResourceResult) -> String {
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text.clone(),
            other => panic!("expected text contents, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_resource_service_creation() {
        let service = service();
        assert_eq!(service.list_resources().await.len(), 3);
        assert_eq!(service.list_resource_templates().await.len(), 1);
    }

    #[tokio::test]
    async fn test_read_server_info() {
        let result = service().read_resource("gsc://server/info").await.unwrap();
        let info: serde_json::Value = serde_json::from_str(&text_of(&result)).unwrap();
        assert_eq!(info["access_token_configured"], true);
        assert_eq!(info["tools"], serde_json::json!(["list_sites", "get_site"]));
        assert!(!text_of(&result).contains("ya29"));
    }

    #[tokio::test]
    async fn test_read_operations_catalog() {
        let result = service()
            .read_resource("gsc://operations/catalog")
            .await
            .unwrap();
        let catalog: serde_json::Value = serde_json::from_str(&text_of(&result)).unwrap();
        assert_eq!(catalog["count"], 10);
        assert_eq!(catalog["operations"][0]["id"], "sites.list");
    }

    #[tokio::test]
    async fn test_read_operation_template() {
        let result = service()
            .read_resource("gsc://operations/searchanalytics.query")
            .await
            .unwrap();
        let op: serde_json::Value = serde_json::from_str(&text_of(&result)).unwrap();
        assert_eq!(op["method"], "POST");
        assert_eq!(op["path"], "sites/{siteUrl}/searchAnalytics/query");
    }

    #[tokio::test]
    async fn test_read_static_reference() {
        let result = service()
            .read_resource("gsc://docs/search-analytics")
            .await
            .unwrap();
        assert!(text_of(&result).starts_with("# Search Analytics Query Reference"));
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let service = service();
        let result = service.read_resource("gsc://operations/sites.purge").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));

        let result = service.read_resource("mcp://server/nonexistent").await;
        assert!(result.is_err());
    }
}
