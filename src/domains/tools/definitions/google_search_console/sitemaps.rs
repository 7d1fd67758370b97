//! Sitemap management tools.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use super::sites::SiteParams;
use crate::client::{ApiResult, SearchConsoleClient};
use crate::domains::tools::definitions::common::{confirmation, to_body};
use crate::domains::tools::definitions::tool::ToolDefinition;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SitemapParams {
    #[schemars(description = "The URL of the site, e.g. 'https://www.example.com/'")]
    pub site_url: String,

    #[schemars(description = "The URL of the sitemap, e.g. 'https://www.example.com/sitemap.xml'")]
    pub feed_path: String,
}

#[derive(Debug, Clone)]
pub struct ListSitemapsTool;

impl ToolDefinition for ListSitemapsTool {
    const NAME: &'static str = "list_sitemaps";
    const DESCRIPTION: &'static str =
        "Lists the sitemaps submitted for a site. Returns an object with a 'sitemap' array.";

    type Params = SiteParams;

    async fn execute(client: &SearchConsoleClient, params: SiteParams) -> ApiResult<Option<Value>> {
        let sitemaps = client.list_sitemaps(&params.site_url, None).await?;
        info!(
            "Successfully listed sitemaps for '{}'. Found {} sitemaps",
            params.site_url,
            sitemaps.sitemap.len()
        );
        to_body(&sitemaps)
    }
}

#[derive(Debug, Clone)]
pub struct SubmitSitemapTool;

impl ToolDefinition for SubmitSitemapTool {
    const NAME: &'static str = "submit_sitemap";
    const DESCRIPTION: &'static str =
        "Submits a sitemap for a site. Returns a confirmation object.";

    type Params = SitemapParams;

    async fn execute(client: &SearchConsoleClient, params: SitemapParams) -> ApiResult<Option<Value>> {
        client.submit_sitemap(&params.site_url, &params.feed_path).await?;
        let message = format!(
            "Sitemap '{}' submitted successfully for site '{}'.",
            params.feed_path, params.site_url
        );
        info!("{}", message);
        Ok(confirmation(message))
    }
}

#[derive(Debug, Clone)]
pub struct DeleteSitemapTool;

impl ToolDefinition for DeleteSitemapTool {
    const NAME: &'static str = "delete_sitemap";
    const DESCRIPTION: &'static str =
        "Deletes a sitemap from a site in Search Console. Returns a confirmation object.";

    type Params = SitemapParams;

    async fn execute(client: &SearchConsoleClient, params: SitemapParams) -> ApiResult<Option<Value>> {
        client.delete_sitemap(&params.site_url, &params.feed_path).await?;
        let message = format!(
            "Sitemap '{}' deleted successfully for site '{}'.",
            params.feed_path, params.site_url
        );
        info!("{}", message);
        Ok(confirmation(message))
    }
}

#[derive(Debug, Clone)]
pub struct GetSitemapTool;

impl ToolDefinition for GetSitemapTool {
    const NAME: &'static str = "get_sitemap";
    const DESCRIPTION: &'static str = "Retrieves information about a specific sitemap.";

    type Params = SitemapParams;

    async fn execute(client: &SearchConsoleClient, params: SitemapParams) -> ApiResult<Option<Value>> {
        let sitemap = client.get_sitemap(&params.site_url, &params.feed_path).await?;
        to_body(&sitemap)
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

    const SITE: &str = "https://example.com/";
    const FEED: &str = "https://example.com/sitemap.xml";

    fn args(value: Value) -> Option<JsonObject> {
        value.as_object().cloned()
    }

    #[tokio::test]
    async fn test_submit_then_get_and_resubmit() {
        let client = fake_client(Arc::new(FakeBackend::new().with_site(SITE)));
        let sitemap_args = json!({ "site_url": SITE, "feed_path": FEED });

        let submitted = dispatch::<SubmitSitemapTool>(&client, args(sitemap_args.clone()))
            .await
            .unwrap();
        assert_eq!(
            submitted.structured_content.unwrap()["message"],
            format!("Sitemap '{}' submitted successfully for site '{}'.", FEED, SITE)
        );

        let resubmitted = dispatch::<SubmitSitemapTool>(&client, args(sitemap_args.clone()))
            .await
            .unwrap();
        assert_ne!(resubmitted.is_error, Some(true));

        let fetched = dispatch::<GetSitemapTool>(&client, args(sitemap_args))
            .await
            .unwrap();
        assert_eq!(fetched.structured_content.unwrap()["path"], FEED);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let client = fake_client(Arc::new(FakeBackend::new().with_site(SITE)));
        let sitemap_args = json!({ "site_url": SITE, "feed_path": FEED });

        dispatch::<SubmitSitemapTool>(&client, args(sitemap_args.clone()))
            .await
            .unwrap();
        let deleted = dispatch::<DeleteSitemapTool>(&client, args(sitemap_args.clone()))
            .await
            .unwrap();
        assert_eq!(deleted.structured_content.unwrap()["status"], "success");

        let listed = dispatch::<ListSitemapsTool>(&client, args(json!({ "site_url": SITE })))
            .await
            .unwrap();
        assert_eq!(listed.structured_content.unwrap()["sitemap"], json!([]));

        let gone = dispatch::<GetSitemapTool>(&client, args(sitemap_args)).await.unwrap();
        assert_eq!(gone.structured_content.unwrap()["kind"], "not_found");
    }

    #[tokio::test]
    async fn test_feedpath_spelling_rejected() {
        let backend = Arc::new(FakeBackend::new().with_site(SITE));
        let client = fake_client(backend.clone());
        let result =
            dispatch::<GetSitemapTool>(&client, args(json!({ "site_url": SITE, "feedpath": FEED }))).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
        assert_eq!(backend.request_count(), 0);
    }
}
