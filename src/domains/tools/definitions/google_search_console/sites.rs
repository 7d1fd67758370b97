//! Site management tools.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::client::{ApiResult, SearchConsoleClient};
use crate::domains::tools::definitions::common::{confirmation, to_body};
use crate::domains::tools::definitions::tool::ToolDefinition;

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListSitesParams {}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SiteParams {
    #[schemars(
        description = "The URL of the site, e.g. 'https://www.example.com/' or 'sc-domain:example.com'"
    )]
    pub site_url: String,
}

#[derive(Debug, Clone)]
pub struct ListSitesTool;

impl ToolDefinition for ListSitesTool {
    const NAME: &'static str = "list_sites";
    const DESCRIPTION: &'static str = "Lists all sites (properties) accessible to the authenticated user. Returns an object with a 'siteEntry' array.";

    type Params = ListSitesParams;

    async fn execute(client: &SearchConsoleClient, _params: ListSitesParams) -> ApiResult<Option<Value>> {
        let sites = client.list_sites().await?;
        info!("Successfully listed sites. Found {} sites", sites.site_entry.len());
        to_body(&sites)
    }
}

#[derive(Debug, Clone)]
pub struct AddSiteTool;

impl ToolDefinition for AddSiteTool {
    const NAME: &'static str = "add_site";
    const DESCRIPTION: &'static str = "Adds a site to the user's sites in Search Console. The site must still be verified afterwards. Returns a confirmation object.";

    type Params = SiteParams;

    async fn execute(client: &SearchConsoleClient, params: SiteParams) -> ApiResult<Option<Value>> {
        client.add_site(&params.site_url).await?;
        let message = format!(
            "Site '{}' added successfully. Please proceed with verification if needed.",
            params.site_url
        );
        info!("{}", message);
        Ok(confirmation(message))
    }
}

#[derive(Debug, Clone)]
pub struct DeleteSiteTool;

impl ToolDefinition for DeleteSiteTool {
    const NAME: &'static str = "delete_site";
    const DESCRIPTION: &'static str =
        "Removes a site from the user's sites in Search Console. Returns a confirmation object.";

    type Params = SiteParams;

    async fn execute(client: &SearchConsoleClient, params: SiteParams) -> ApiResult<Option<Value>> {
        client.delete_site(&params.site_url).await?;
        let message = format!("Site '{}' deleted successfully.", params.site_url);
        info!("{}", message);
        Ok(confirmation(message))
    }
}

#[derive(Debug, Clone)]
pub struct GetSiteTool;

impl ToolDefinition for GetSiteTool {
    const NAME: &'static str = "get_site";
    const DESCRIPTION: &'static str =
        "Retrieves information about a specific site, including the user's permission level.";

    type Params = SiteParams;

    async fn execute(client: &SearchConsoleClient, params: SiteParams) -> ApiResult<Option<Value>> {
        let site = client.get_site(&params.site_url).await?;
        to_body(&site)
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
    async fn test_add_site_returns_confirmation() {
        let client = fake_client(Arc::new(FakeBackend::new()));

        let result = dispatch::<AddSiteTool>(&client, args(json!({ "site_url": "https://example.com/" })))
            .await
            .unwrap();
        let content = result.structured_content.unwrap();
        assert_eq!(content["status"], "success");
        assert!(content["message"].as_str().unwrap().contains("https://example.com/"));

        let site = dispatch::<GetSiteTool>(&client, args(json!({ "site_url": "https://example.com/" })))
            .await
            .unwrap();
        assert_eq!(site.structured_content.unwrap()["siteUrl"], "https://example.com/");
    }

    #[tokio::test]
    async fn test_delete_site_confirmation_and_failure() {
        let client = fake_client(Arc::new(FakeBackend::new().with_site("https://example.com/")));
        let site_args = json!({ "site_url": "https://example.com/" });

        let deleted = dispatch::<DeleteSiteTool>(&client, args(site_args.clone()))
            .await
            .unwrap();
        assert_eq!(
            deleted.structured_content.unwrap()["message"],
            "Site 'https://example.com/' deleted successfully."
        );

        let again = dispatch::<DeleteSiteTool>(&client, args(site_args)).await.unwrap();
        assert_eq!(again.is_error, Some(true));
    }

    #[tokio::test]
    async fn test_camel_case_argument_rejected() {
        let backend = Arc::new(FakeBackend::new());
        let client = fake_client(backend.clone());
        let result = dispatch::<GetSiteTool>(&client, args(json!({ "siteUrl": "https://example.com/" }))).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
        assert_eq!(backend.request_count(), 0);
    }

    #[tokio::test]
    async fn test_auth_failure_is_error_result() {
        let client = fake_client(Arc::new(FakeBackend::new().fail_with(401, "Invalid Credentials")));
        let result = dispatch::<ListSitesTool>(&client, None).await.unwrap();
        assert_eq!(result.is_error, Some(true));
        let details = result.structured_content.unwrap();
        assert_eq!(details["tool"], "list_sites");
        assert_eq!(details["kind"], "auth");
        assert_eq!(details["status"], 401);
    }
}
