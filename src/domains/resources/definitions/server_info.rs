//! Server info resource definition.

use serde::Serialize;

use super::ResourceDefinition;
use crate::core::config::{AppKind, Config};
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};

/// Server information resource (dynamic).
pub struct ServerInfoResource;

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "gsc://server/info";
    const NAME: &'static str = "Server Information";
    const DESCRIPTION: &'static str =
        "Server name and version, the active tool set, API endpoints and whether credentials are configured";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::ServerInfo)
    }
}

/// What `gsc://server/info` reports. Never carries the token itself.
#[derive(Debug, Clone, Serialize)]
pub struct ServerSummary {
    pub name: String,
    pub version: String,
    pub app: AppKind,
    pub tools: Vec<&'static str>,
    pub webmasters_base_url: String,
    pub searchconsole_base_url: String,
    pub access_token_configured: bool,
}

impl ServerSummary {
    pub fn new(config: &Config, tools: Vec<&'static str>) -> Self {
        Self {
            name: config.server.name.clone(),
            version: config.server.version.clone(),
            app: config.api.app,
            tools,
            webmasters_base_url: config.api.webmasters_base_url.clone(),
            searchconsole_base_url: config.api.searchconsole_base_url.clone(),
            access_token_configured: config.credentials.access_token.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_info_metadata() {
        assert_eq!(ServerInfoResource::URI, "gsc://server/info");
        assert_eq!(ServerInfoResource::MIME_TYPE, "application/json");
    }

    #[test]
    fn test_summary_hides_token() {
        let mut config = Config::default();
        config.credentials.access_token = Some("ya29.hidden".to_string());

        let summary = ServerSummary::new(&config, vec!["list_sites"]);
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"access_token_configured\":true"));
        assert!(json.contains("\"app\":\"google_searchconsole\""));
        assert!(!json.contains("ya29"));
    }
}
