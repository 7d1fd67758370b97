//! Sitemap management tools.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::client::{ApiResult, SearchConsoleClient};
use crate::domains::tools::definitions::common::to_body;
use crate::domains::tools::definitions::tool::ToolDefinition;

/// Parameters for `list_sitemaps`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListSitemapsParams {
    #[schemars(description = "The site's URL, including protocol, e.g. 'http://www.example.com/'")]
    pub site_url: String,

    #[schemars(
        description = "Optional URL of a sitemap index; when given, only the sitemaps it contains are listed"
    )]
    #[serde(default)]
    pub sitemap_index: Option<String>,
}

/// Parameters for tools addressing a single sitemap.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SitemapParams {
    #[schemars(description = "The site's URL, including protocol, e.g. 'http://www.example.com/'")]
    pub site_url: String,

    #[schemars(description = "The URL of the sitemap, e.g. 'http://www.example.com/sitemap.xml'")]
    pub feedpath: String,
}

#[derive(Debug, Clone)]
pub struct ListSitemapsTool;

impl ToolDefinition for ListSitemapsTool {
    const NAME: &'static str = "list_sitemaps";
    const DESCRIPTION: &'static str = "Lists the sitemaps submitted for a site, or included in a given sitemap index. Returns an object with a 'sitemap' array.";

    type Params = ListSitemapsParams;

    async fn execute(client: &SearchConsoleClient, params: ListSitemapsParams) -> ApiResult<Option<Value>> {
        let sitemaps = client
            .list_sitemaps(&params.site_url, params.sitemap_index.as_deref())
            .await?;
        info!("Listed {} sitemaps for {}", sitemaps.sitemap.len(), params.site_url);
        to_body(&sitemaps)
    }
}

#[derive(Debug, Clone)]
pub struct GetSitemapTool;

impl ToolDefinition for GetSitemapTool {
    const NAME: &'static str = "get_sitemap";
    const DESCRIPTION: &'static str = "Retrieves information about a specific sitemap: submission and download times, pending state, warnings, errors and per-type content counts.";

    type Params = SitemapParams;

    async fn execute(client: &SearchConsoleClient, params: SitemapParams) -> ApiResult<Option<Value>> {
        let sitemap = client.get_sitemap(&params.site_url, &params.feedpath).await?;
        to_body(&sitemap)
    }
}

#[derive(Debug, Clone)]
pub struct SubmitSitemapTool;

impl ToolDefinition for SubmitSitemapTool {
    const NAME: &'static str = "submit_sitemap";
    const DESCRIPTION: &'static str = "Submits a sitemap for a site. Resubmitting an existing sitemap is allowed. Returns the upstream response body, usually empty.";

    type Params = SitemapParams;

    async fn execute(client: &SearchConsoleClient, params: SitemapParams) -> ApiResult<Option<Value>> {
        client.submit_sitemap(&params.site_url, &params.feedpath).await
    }
}

#[derive(Debug, Clone)]
pub struct DeleteSitemapTool;

impl ToolDefinition for DeleteSitemapTool {
    const NAME: &'static str = "delete_sitemap";
    const DESCRIPTION: &'static str = "Deletes a sitemap from the Sitemaps report. The sitemap file itself is not touched. Returns the upstream response body, usually empty.";

    type Params = SitemapParams;

    async fn execute(client: &SearchConsoleClient, params: SitemapParams) -> ApiResult<Option<Value>> {
        client.delete_sitemap(&params.site_url, &params.feedpath).await
    }
}
