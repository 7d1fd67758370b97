//! Search analytics and URL inspection tools.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::client::{
    ApiResult, DimensionFilterGroup, InspectUrlRequest, SearchAnalyticsQuery, SearchAnalyticsRow,
    SearchConsoleClient,
};
use crate::domains::tools::definitions::common::to_body;
use crate::domains::tools::definitions::tool::ToolDefinition;

/// Parameters for `query_search_analytics`.
///
/// Only the optional fields that are supplied end up in the request body.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuerySearchAnalyticsParams {
    #[schemars(description = "The site's URL, including protocol, e.g. 'http://www.example.com/'")]
    pub site_url: String,

    #[schemars(description = "Start date of the requested range, YYYY-MM-DD (PT time)")]
    pub start_date: String,

    #[schemars(description = "End date of the requested range, YYYY-MM-DD (PT time); must not precede startDate")]
    pub end_date: String,

    #[schemars(description = "Dimensions to group by: date, query, page, country, device, searchAppearance")]
    #[serde(default)]
    pub dimensions: Option<Vec<String>>,

    #[schemars(description = "Filter groups applied to the dimensions")]
    #[serde(default)]
    pub dimension_filter_groups: Option<Vec<DimensionFilterGroup>>,

    #[schemars(description = "How data is aggregated: auto, byPage or byProperty")]
    #[serde(default)]
    pub aggregation_type: Option<String>,

    #[schemars(description = "Maximum number of rows to return (1-25000)")]
    #[serde(default)]
    pub row_limit: Option<u32>,

    #[schemars(description = "Zero-based index of the first row in the response")]
    #[serde(default)]
    pub start_row: Option<u32>,

    #[schemars(description = "'final' for finalized data only, 'all' to include fresh data")]
    #[serde(default)]
    pub data_state: Option<String>,

    #[schemars(description = "Search type filter: web, image, video, news, discover or googleNews")]
    #[serde(rename = "search_type", default)]
    pub search_type: Option<String>,
}

impl QuerySearchAnalyticsParams {
    fn to_query(&self) -> SearchAnalyticsQuery {
        SearchAnalyticsQuery {
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            dimensions: self.dimensions.clone().filter(|d| !d.is_empty()),
            search_type: self.search_type.clone(),
            dimension_filter_groups: self.dimension_filter_groups.clone().filter(|g| !g.is_empty()),
            aggregation_type: self.aggregation_type.clone(),
            row_limit: self.row_limit,
            start_row: self.start_row,
            data_state: self.data_state.clone(),
        }
    }
}

/// Parameters for `index_inspect_url`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IndexInspectUrlParams {
    #[schemars(description = "Fully-qualified URL to inspect; must be under the property in siteUrl")]
    pub inspection_url: String,

    #[schemars(
        description = "The property as defined in Search Console, e.g. 'https://www.example.com/' or 'sc-domain:example.com'"
    )]
    pub site_url: String,

    #[schemars(description = "Optional IETF BCP-47 language code for translated issue messages, e.g. 'en-US'")]
    #[serde(default)]
    pub language_code: Option<String>,
}

#[derive(Debug, Clone)]
pub struct QuerySearchAnalyticsTool;

impl ToolDefinition for QuerySearchAnalyticsTool {
    const NAME: &'static str = "query_search_analytics";
    const DESCRIPTION: &'static str = "Queries search traffic data (clicks, impressions, CTR, position) for a site over a date range, optionally grouped by dimensions and filtered. Returns the upstream response with a 'rows' array.";

    type Params = QuerySearchAnalyticsParams;

    async fn execute(
        client: &SearchConsoleClient,
        params: QuerySearchAnalyticsParams,
    ) -> ApiResult<Option<Value>> {
        let response = client
            .query_search_analytics(&params.site_url, &params.to_query())
            .await?;
        info!(
            "Search analytics for {} returned {} rows ({} clicks)",
            params.site_url,
            response.rows.len(),
            response.rows.iter().map(SearchAnalyticsRow::clicks).sum::<f64>()
        );
        to_body(&response)
    }
}

#[derive(Debug, Clone)]
pub struct IndexInspectUrlTool;

impl ToolDefinition for IndexInspectUrlTool {
    const NAME: &'static str = "index_inspect_url";
    const DESCRIPTION: &'static str = "Inspects a URL in the Google index: indexing verdict, coverage state, canonical URLs, crawl details, mobile usability and rich results.";

    type Params = IndexInspectUrlParams;

    async fn execute(client: &SearchConsoleClient, params: IndexInspectUrlParams) -> ApiResult<Option<Value>> {
        let request = InspectUrlRequest {
            inspection_url: params.inspection_url,
            site_url: params.site_url,
            language_code: params.language_code,
        };
        let response = client.inspect_url(&request).await?;
        info!(
            "Inspected {}: verdict {}",
            request.inspection_url,
            response.verdict().unwrap_or("unknown")
        );
        to_body(&response)
    }
}
