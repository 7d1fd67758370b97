//! Search analytics and URL inspection tools.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::client::{
    ApiResult, DimensionFilterGroup, InspectUrlRequest, SearchAnalyticsQuery, SearchConsoleClient,
};
use crate::domains::tools::definitions::common::to_body;
use crate::domains::tools::definitions::tool::ToolDefinition;

fn default_row_limit() -> u32 {
    1000
}

/// Parameters for `query_search_analytics`.
///
/// `dimensions`, `row_limit` and `start_row` are always sent.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct QuerySearchAnalyticsParams {
    #[schemars(
        description = "The URL of the site, e.g. 'sc-domain:example.com' or 'https://www.example.com/'"
    )]
    pub site_url: String,

    #[schemars(description = "Start date of the period in YYYY-MM-DD format")]
    pub start_date: String,

    #[schemars(description = "End date of the period in YYYY-MM-DD format")]
    pub end_date: String,

    #[schemars(description = "Dimensions to group by, e.g. ['date', 'query', 'page']")]
    pub dimensions: Vec<String>,

    #[schemars(
        description = "Search type: web, image, video, news, discover or googleNews. Sent upstream as the body field 'type' (the deprecated 'searchType' field is not used)"
    )]
    #[serde(default)]
    pub search_type: Option<String>,

    #[schemars(description = "Number of rows to return (default: 1000, max: 25000)")]
    #[serde(default = "default_row_limit")]
    pub row_limit: u32,

    #[schemars(description = "Zero-based index of the first row to return (default: 0)")]
    #[serde(default)]
    pub start_row: u32,

    #[schemars(description = "Filters to apply to dimensions")]
    #[serde(default)]
    pub dimension_filter_groups: Option<Vec<DimensionFilterGroup>>,

    #[schemars(description = "How data is aggregated: auto, byPage or byProperty")]
    #[serde(default)]
    pub aggregation_type: Option<String>,

    #[schemars(description = "'all' to include fresh data, 'final' for finalized data only")]
    #[serde(default)]
    pub data_state: Option<String>,
}

impl QuerySearchAnalyticsParams {
    fn to_query(&self) -> SearchAnalyticsQuery {
        SearchAnalyticsQuery {
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            dimensions: Some(self.dimensions.clone()),
            search_type: self.search_type.clone().filter(|t| !t.is_empty()),
            dimension_filter_groups: self.dimension_filter_groups.clone().filter(|g| !g.is_empty()),
            aggregation_type: self.aggregation_type.clone().filter(|a| !a.is_empty()),
            row_limit: Some(self.row_limit),
            start_row: Some(self.start_row),
            data_state: self.data_state.clone().filter(|d| !d.is_empty()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct InspectUrlParams {
    #[schemars(
        description = "The site URL as defined in Search Console, e.g. 'sc-domain:example.com'"
    )]
    pub site_url: String,

    #[schemars(description = "The specific URL to inspect (must be under site_url)")]
    pub inspection_url: String,

    #[schemars(description = "Optional language code for the inspection, e.g. 'en-US'")]
    #[serde(default)]
    pub language_code: Option<String>,
}

#[derive(Debug, Clone)]
pub struct QuerySearchAnalyticsTool;

impl ToolDefinition for QuerySearchAnalyticsTool {
    const NAME: &'static str = "query_search_analytics";
    const DESCRIPTION: &'static str = "Queries search analytics data (clicks, impressions, CTR, position) for a site, grouped by the given dimensions. Returns the upstream response with a 'rows' array.";

    type Params = QuerySearchAnalyticsParams;

    async fn execute(
        client: &SearchConsoleClient,
        params: QuerySearchAnalyticsParams,
    ) -> ApiResult<Option<Value>> {
        info!(
            "Querying search analytics for site: {}, from {} to {}",
            params.site_url, params.start_date, params.end_date
        );
        let response = client
            .query_search_analytics(&params.site_url, &params.to_query())
            .await?;
        info!(
            "Successfully queried search analytics for '{}'. Response rows: {}",
            params.site_url,
            response.rows.len()
        );
        to_body(&response)
    }
}

#[derive(Debug, Clone)]
pub struct InspectUrlTool;

impl ToolDefinition for InspectUrlTool {
    const NAME: &'static str = "inspect_url";
    const DESCRIPTION: &'static str = "Runs a URL inspection for the given URL using the Index Inspection API. Returns the inspection result (index status, crawl, mobile usability, rich results).";

    type Params = InspectUrlParams;

    async fn execute(client: &SearchConsoleClient, params: InspectUrlParams) -> ApiResult<Option<Value>> {
        let request = InspectUrlRequest {
            inspection_url: params.inspection_url,
            site_url: params.site_url,
            language_code: params.language_code.filter(|l| !l.is_empty()),
        };
        let response = client.inspect_url(&request).await?;
        info!("Successfully inspected URL '{}'", request.inspection_url);
        to_body(&response)
    }
}
