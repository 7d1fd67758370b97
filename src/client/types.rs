//! Pass-through representations of Search Console API objects.
//!
//! Field names follow the upstream JSON (camelCase). Every record keeps the
//! fields it does not model in `extra`, so re-serializing a response yields
//! what the API sent.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A verified (or pending) property in Search Console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub site_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission_level: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of `sites.list`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitesListResponse {
    #[serde(default)]
    pub site_entry: Vec<Site>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Per-content-type counters of a sitemap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapContent {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A submitted sitemap.
///
/// Counters such as `warnings` and `errors` are int64 in the API and come
/// over the wire as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sitemap {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_submitted: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_downloaded: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_pending: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_sitemaps_index: Option<bool>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub sitemap_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contents: Vec<SitemapContent>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of `sitemaps.list`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapsListResponse {
    #[serde(default)]
    pub sitemap: Vec<Sitemap>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single dimension filter inside a filter group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DimensionFilter {
    /// Dimension to filter on: country, device, page, query or searchAppearance.
    pub dimension: String,
    /// equals, notEquals, contains, notContains, includingRegex or excludingRegex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    /// Value to match.
    pub expression: String,
}

/// A group of dimension filters combined with `groupType`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DimensionFilterGroup {
    /// Only "and" is supported by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_type: Option<String>,
    #[serde(default)]
    pub filters: Vec<DimensionFilter>,
}

/// Request body of `searchanalytics.query`.
///
/// Unset optional fields are omitted from the body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchAnalyticsQuery {
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Vec<String>>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub search_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension_filter_groups: Option<Vec<DimensionFilterGroup>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_row: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_state: Option<String>,
}

/// One aggregated row of search analytics data.
///
/// Metrics stay as the numbers the API sent; `clicks` and `impressions`
/// arrive as integers and must not come back as floats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchAnalyticsRow {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keys: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clicks: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impressions: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ctr: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SearchAnalyticsRow {
    /// Click count as a float, zero when absent.
    pub fn clicks(&self) -> f64 {
        self.clicks.as_ref().and_then(Number::as_f64).unwrap_or(0.0)
    }
}

/// Response of `searchanalytics.query`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchAnalyticsResponse {
    #[serde(default)]
    pub rows: Vec<SearchAnalyticsRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_aggregation_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request body of `urlInspection.index.inspect`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectUrlRequest {
    pub inspection_url: String,
    pub site_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

/// Response of `urlInspection.index.inspect`.
///
/// The inspection result is deep and version-dependent, so it is kept as raw
/// JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectUrlResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inspection_result: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InspectUrlResponse {
    /// The index verdict (`PASS`, `NEUTRAL`, `FAIL`...), if reported.
    pub fn verdict(&self) -> Option<&str> {
        self.inspection_result
            .as_ref()?
            .get("indexStatusResult")?
            .get("verdict")?
            .as_str()
    }
}
