//! Search Console API client.
//!
//! One method per upstream operation. Each method renders its
//! [`Operation`], sends a single request through the [`HttpBackend`] and
//! decodes the response. Side-effecting operations return the upstream body
//! verbatim, which is `None` for the usual 204 responses.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::backend::{ApiRequest, HttpBackend};
use super::error::{ApiError, ApiResult};
use super::operations::{self, ApiBase, Operation};
use super::types::{
    InspectUrlRequest, InspectUrlResponse, SearchAnalyticsQuery, SearchAnalyticsResponse, Site,
    Sitemap, SitemapsListResponse, SitesListResponse,
};

pub const DEFAULT_WEBMASTERS_BASE_URL: &str = "https://www.googleapis.com/webmasters/v3";
pub const DEFAULT_SEARCHCONSOLE_BASE_URL: &str = "https://searchconsole.googleapis.com/v1";

/// Date format the API accepts for analytics ranges.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Client for the Search Console API.
#[derive(Clone)]
pub struct SearchConsoleClient {
    backend: Arc<dyn HttpBackend>,
    webmasters_base_url: String,
    searchconsole_base_url: String,
}

impl std::fmt::Debug for SearchConsoleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchConsoleClient")
            .field("webmasters_base_url", &self.webmasters_base_url)
            .field("searchconsole_base_url", &self.searchconsole_base_url)
            .finish_non_exhaustive()
    }
}

impl SearchConsoleClient {
    /// Create a client against the public Google endpoints.
    pub fn new(backend: Arc<dyn HttpBackend>) -> Self {
        Self::with_base_urls(
            backend,
            DEFAULT_WEBMASTERS_BASE_URL,
            DEFAULT_SEARCHCONSOLE_BASE_URL,
        )
    }

    /// Create a client with custom base URLs (proxies, emulators, tests).
    pub fn with_base_urls(
        backend: Arc<dyn HttpBackend>,
        webmasters_base_url: impl Into<String>,
        searchconsole_base_url: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            webmasters_base_url: webmasters_base_url.into().trim_end_matches('/').to_string(),
            searchconsole_base_url: searchconsole_base_url
                .into()
                .trim_end_matches('/')
                .to_string(),
        }
    }

    pub fn webmasters_base_url(&self) -> &str {
        &self.webmasters_base_url
    }

    pub fn searchconsole_base_url(&self) -> &str {
        &self.searchconsole_base_url
    }

    // ========================================================================
    // Sites
    // ========================================================================

    /// Lists the user's Search Console sites.
    #[instrument(skip(self))]
    pub async fn list_sites(&self) -> ApiResult<SitesListResponse> {
        let body = self
            .send(&operations::SITES_LIST, &[], &[], None::<&Value>)
            .await?;
        decode_or_default(body)
    }

    /// Retrieves information about a specific site.
    #[instrument(skip(self))]
    pub async fn get_site(&self, site_url: &str) -> ApiResult<Site> {
        let body = self
            .send(&operations::SITES_GET, &[("siteUrl", site_url)], &[], None::<&Value>)
            .await?;
        decode_required(&operations::SITES_GET, body)
    }

    /// Adds a site to the user's property set.
    #[instrument(skip(self))]
    pub async fn add_site(&self, site_url: &str) -> ApiResult<Option<Value>> {
        self.send(&operations::SITES_ADD, &[("siteUrl", site_url)], &[], None::<&Value>)
            .await
    }

    /// Removes a site from the user's property set.
    #[instrument(skip(self))]
    pub async fn delete_site(&self, site_url: &str) -> ApiResult<Option<Value>> {
        self.send(&operations::SITES_DELETE, &[("siteUrl", site_url)], &[], None::<&Value>)
            .await
    }

    // ========================================================================
    // Sitemaps
    // ========================================================================

    /// Lists the sitemaps submitted for a site, or those included in
    /// `sitemap_index` when given.
    #[instrument(skip(self))]
    pub async fn list_sitemaps(
        &self,
        site_url: &str,
        sitemap_index: Option<&str>,
    ) -> ApiResult<SitemapsListResponse> {
        let query: Vec<(&str, &str)> = sitemap_index
            .filter(|index| !index.trim().is_empty())
            .map(|index| vec![("sitemapIndex", index)])
            .unwrap_or_default();

        let body = self
            .send(
                &operations::SITEMAPS_LIST,
                &[("siteUrl", site_url)],
                &query,
                None::<&Value>,
            )
            .await?;
        decode_or_default(body)
    }

    /// Retrieves information about a specific sitemap.
    #[instrument(skip(self))]
    pub async fn get_sitemap(&self, site_url: &str, feedpath: &str) -> ApiResult<Sitemap> {
        let body = self
            .send(
                &operations::SITEMAPS_GET,
                &[("siteUrl", site_url), ("feedpath", feedpath)],
                &[],
                None::<&Value>,
            )
            .await?;
        decode_required(&operations::SITEMAPS_GET, body)
    }

    /// Submits a sitemap. Resubmitting the same sitemap is not an error.
    #[instrument(skip(self))]
    pub async fn submit_sitemap(&self, site_url: &str, feedpath: &str) -> ApiResult<Option<Value>> {
        self.send(
            &operations::SITEMAPS_SUBMIT,
            &[("siteUrl", site_url), ("feedpath", feedpath)],
            &[],
            None::<&Value>,
        )
        .await
    }

    /// Deletes a sitemap from a site (the file itself stays on the web).
    #[instrument(skip(self))]
    pub async fn delete_sitemap(&self, site_url: &str, feedpath: &str) -> ApiResult<Option<Value>> {
        self.send(
            &operations::SITEMAPS_DELETE,
            &[("siteUrl", site_url), ("feedpath", feedpath)],
            &[],
            None::<&Value>,
        )
        .await
    }

    // ========================================================================
    // Search analytics and URL inspection
    // ========================================================================

    /// Queries search traffic data.
    ///
    /// The date range is checked locally; an unparseable date or a start
    /// after the end fails without a request.
    #[instrument(skip(self, query), fields(start = %query.start_date, end = %query.end_date))]
    pub async fn query_search_analytics(
        &self,
        site_url: &str,
        query: &SearchAnalyticsQuery,
    ) -> ApiResult<SearchAnalyticsResponse> {
        validate_date_range(&query.start_date, &query.end_date)?;

        let body = self
            .send(
                &operations::SEARCH_ANALYTICS_QUERY,
                &[("siteUrl", site_url)],
                &[],
                Some(query),
            )
            .await?;
        decode_or_default(body)
    }

    /// Inspects a URL in the Google index.
    #[instrument(skip(self, request), fields(url = %request.inspection_url))]
    pub async fn inspect_url(&self, request: &InspectUrlRequest) -> ApiResult<InspectUrlResponse> {
        require_non_blank("inspectionUrl", &request.inspection_url)?;
        require_non_blank("siteUrl", &request.site_url)?;

        let body = self
            .send(
                &operations::URL_INSPECTION_INDEX_INSPECT,
                &[],
                &[],
                Some(request),
            )
            .await?;
        decode_or_default(body)
    }

    // ========================================================================
    // Request plumbing
    // ========================================================================

    /// Build the absolute URL for an operation.
    pub fn build_url(
        &self,
        op: &Operation,
        path_args: &[(&str, &str)],
        query: &[(&str, &str)],
    ) -> ApiResult<String> {
        let base = match op.base {
            ApiBase::Webmasters => &self.webmasters_base_url,
            ApiBase::SearchConsole => &self.searchconsole_base_url,
        };
        let mut url = format!("{}/{}", base, op.render_path(path_args)?);

        if !query.is_empty() {
            let encoded = serde_urlencoded::to_string(query)
                .map_err(|e| ApiError::invalid("query", e.to_string()))?;
            url.push('?');
            url.push_str(&encoded);
        }

        Ok(url)
    }

    /// Send one request and return the parsed body, `None` when empty.
    async fn send<B: Serialize + ?Sized>(
        &self,
        op: &Operation,
        path_args: &[(&str, &str)],
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> ApiResult<Option<Value>> {
        let url = self.build_url(op, path_args, query)?;
        let body = body.map(serde_json::to_value).transpose()?;

        debug!("{} {} ({})", op.method.as_str(), url, op.id);

        let response = self
            .backend
            .execute(ApiRequest {
                method: op.method,
                url,
                body,
            })
            .await?;

        if !response.is_success() {
            let err = ApiError::from_status(response.status, &response.body);
            warn!("{} failed: {}", op.id, err);
            return Err(err);
        }

        if response.body.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&response.body)
            .map(Some)
            .map_err(|e| ApiError::Decode(format!("{}: {}", op.id, e)))
    }
}

/// Decode a body that must be present.
fn decode_required<T: DeserializeOwned>(op: &Operation, body: Option<Value>) -> ApiResult<T> {
    let value = body.ok_or_else(|| ApiError::Decode(format!("{}: empty response body", op.id)))?;
    Ok(serde_json::from_value(value)?)
}

/// Decode a body where an empty response means "no entries".
fn decode_or_default<T: DeserializeOwned + Default>(body: Option<Value>) -> ApiResult<T> {
    match body {
        Some(value) => Ok(serde_json::from_value(value)?),
        None => Ok(T::default()),
    }
}

fn require_non_blank(name: &str, value: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::missing(name));
    }
    Ok(())
}

/// Check that both dates are `YYYY-MM-DD` and `start <= end`.
pub fn validate_date_range(start_date: &str, end_date: &str) -> ApiResult<()> {
    let start = parse_date("startDate", start_date)?;
    let end = parse_date("endDate", end_date)?;

    if start > end {
        return Err(ApiError::invalid(
            "startDate",
            format!("start date {} is after end date {}", start_date, end_date),
        ));
    }
    Ok(())
}

fn parse_date(name: &str, value: &str) -> ApiResult<NaiveDate> {
    require_non_blank(name, value)?;
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| ApiError::invalid(name, format!("'{}' is not a YYYY-MM-DD date", value)))
}
