//! Site management tools.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::client::{ApiResult, SearchConsoleClient};
use crate::domains::tools::definitions::common::to_body;
use crate::domains::tools::definitions::tool::ToolDefinition;

/// `list_sites` takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListSitesParams {}

/// Parameters for tools addressing a single site.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteParams {
    /// The site's URL as defined in Search Console.
    #[schemars(
        description = "The URL of the site as defined in Search Console, e.g. 'https://www.example.com/' or 'sc-domain:example.com'"
    )]
    pub site_url: String,
}

#[derive(Debug, Clone)]
pub struct ListSitesTool;

impl ToolDefinition for ListSitesTool {
    const NAME: &'static str = "list_sites";
    const DESCRIPTION: &'static str = "Lists the user's Search Console sites. Returns an object with a 'siteEntry' array of {siteUrl, permissionLevel}.";

    type Params = ListSitesParams;

    async fn execute(client: &SearchConsoleClient, _params: ListSitesParams) -> ApiResult<Option<Value>> {
        let sites = client.list_sites().await?;
        info!("Listed {} sites", sites.site_entry.len());
        to_body(&sites)
    }
}

#[derive(Debug, Clone)]
pub struct GetSiteTool;

impl ToolDefinition for GetSiteTool {
    const NAME: &'static str = "get_site";
    const DESCRIPTION: &'static str =
        "Retrieves information about a specific site: its URL and the user's permission level.";

    type Params = SiteParams;

    async fn execute(client: &SearchConsoleClient, params: SiteParams) -> ApiResult<Option<Value>> {
        let site = client.get_site(&params.site_url).await?;
        to_body(&site)
    }
}

#[derive(Debug, Clone)]
pub struct AddSiteTool;

impl ToolDefinition for AddSiteTool {
    const NAME: &'static str = "add_site";
    const DESCRIPTION: &'static str = "Adds a site to the set of the user's sites in Search Console. The site still has to be verified. Returns the upstream response body, usually empty.";

    type Params = SiteParams;

    async fn execute(client: &SearchConsoleClient, params: SiteParams) -> ApiResult<Option<Value>> {
        client.add_site(&params.site_url).await
    }
}

#[derive(Debug, Clone)]
pub struct DeleteSiteTool;

impl ToolDefinition for DeleteSiteTool {
    const NAME: &'static str = "delete_site";
    const DESCRIPTION: &'static str = "Removes a site from the set of the user's Search Console sites. Returns the upstream response body, usually empty.";

    type Params = SiteParams;

    async fn execute(client: &SearchConsoleClient, params: SiteParams) -> ApiResult<Option<Value>> {
        client.delete_site(&params.site_url).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rmcp::model::JsonObject;
    use serde_json::json;

    use super::*;
    use crate::client::fake::{FakeBackend, fake_client};
    use crate::domains::tools::ToolError;
    use crate::domains::tools::definitions::tool::dispatch;

    fn args(value: Value) -> Option<JsonObject> {
        value.as_object().cloned()
    }

    #[tokio::test]
    async fn test_add_site_returns_empty_body_and_is_listed() {
        let backend = Arc::new(FakeBackend::new());
        let client = fake_client(backend.clone());

        let added = dispatch::<AddSiteTool>(&client, args(json!({ "siteUrl": "https://example.com/" })))
            .await
            .unwrap();
        assert_ne!(added.is_error, Some(true));
        assert!(added.structured_content.is_none());

        let listed = dispatch::<ListSitesTool>(&client, None).await.unwrap();
        let entries = listed.structured_content.unwrap()["siteEntry"].clone();
        assert_eq!(entries[0]["siteUrl"], "https://example.com/");
    }

    #[tokio::test]
    async fn test_get_site_structured_content() {
        let backend = Arc::new(FakeBackend::new().with_site("sc-domain:example.com"));
        let client = fake_client(backend);

        let result = dispatch::<GetSiteTool>(&client, args(json!({ "siteUrl": "sc-domain:example.com" })))
            .await
            .unwrap();
        let site = result.structured_content.unwrap();
        assert_eq!(site["siteUrl"], "sc-domain:example.com");
        assert_eq!(site["permissionLevel"], "siteOwner");
    }

    #[tokio::test]
    async fn test_missing_site_url_is_invalid_arguments() {
        let backend = Arc::new(FakeBackend::new());
        let client = fake_client(backend.clone());

        let result = dispatch::<GetSiteTool>(&client, args(json!({}))).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));

        let result = dispatch::<DeleteSiteTool>(&client, args(json!({ "siteUrl": "  " }))).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
        assert_eq!(backend.request_count(), 0);
    }

    #[tokio::test]
    async fn test_snake_case_argument_rejected() {
        let client = fake_client(Arc::new(FakeBackend::new()));
        let result = dispatch::<GetSiteTool>(&client, args(json!({ "site_url": "https://example.com/" }))).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[tokio::test]
    async fn test_delete_unknown_site_is_error_result() {
        let client = fake_client(Arc::new(FakeBackend::new()));
        let result = dispatch::<DeleteSiteTool>(&client, args(json!({ "siteUrl": "https://nope.test/" })))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        let details = result.structured_content.unwrap();
        assert_eq!(details["tool"], "delete_site");
        assert_eq!(details["kind"], "not_found");
    }
}
