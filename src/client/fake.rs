//! In-memory Search Console used by unit tests.
//!
//! Understands the same URLs the real API serves, keeps sites and sitemaps
//! in memory and records every request it receives.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};

use super::backend::{ApiRequest, ApiResponse, HttpBackend};
use super::error::ApiResult;
use super::operations::HttpMethod;
use super::search_console::SearchConsoleClient;

pub const FAKE_WEBMASTERS_URL: &str = "https://fake.test/webmasters/v3";
pub const FAKE_SEARCHCONSOLE_URL: &str = "https://fake.test/v1";

/// Client pointed at the fake endpoints.
pub fn fake_client(backend: Arc<FakeBackend>) -> SearchConsoleClient {
    SearchConsoleClient::with_base_urls(backend, FAKE_WEBMASTERS_URL, FAKE_SEARCHCONSOLE_URL)
}

#[derive(Default)]
struct State {
    sites: BTreeMap<String, String>,
    sitemaps: BTreeMap<(String, String), Value>,
    requests: Vec<ApiRequest>,
}

/// Fake backend emulating the Search Console endpoints.
#[derive(Default)]
pub struct FakeBackend {
    state: Mutex<State>,
    failure: Option<(u16, String)>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-register a verified site.
    pub fn with_site(self, site_url: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .sites
            .insert(site_url.to_string(), "siteOwner".to_string());
        self
    }

    /// Answer every request with the given error status.
    pub fn fail_with(mut self, status: u16, message: &str) -> Self {
        self.failure = Some((status, message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    fn route(&self, request: &ApiRequest) -> ApiResponse {
        if let Some((status, message)) = &self.failure {
            return error(*status, message);
        }

        let (path, query) = match request.url.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (request.url.as_str(), None),
        };

        if let Some(rest) = path.strip_prefix(&format!("{}/", FAKE_SEARCHCONSOLE_URL)) {
            return match (request.method, rest) {
                (HttpMethod::Post, "urlInspection/index:inspect") => self.inspect(request),
                _ => error(404, "Unknown Search Console endpoint"),
            };
        }

        let Some(rest) = path.strip_prefix(&format!("{}/", FAKE_WEBMASTERS_URL)) else {
            return error(404, "Unknown host");
        };

        let segments: Vec<String> = rest
            .split('/')
            .map(|s| urlencoding::decode(s).map(|c| c.into_owned()).unwrap_or_default())
            .collect();
        let segments: Vec<&str> = segments.iter().map(String::as_str).collect();

        let mut state = self.state.lock().unwrap();
        match (request.method, segments.as_slice()) {
            (HttpMethod::Get, ["sites"]) => {
                let entries: Vec<Value> = state
                    .sites
                    .iter()
                    .map(|(url, level)| json!({ "siteUrl": url, "permissionLevel": level }))
                    .collect();
                if entries.is_empty() {
                    ok(json!({}))
                } else {
                    ok(json!({ "siteEntry": entries }))
                }
            }
            (HttpMethod::Get, ["sites", site]) => match state.sites.get(*site) {
                Some(level) => ok(json!({ "siteUrl": site, "permissionLevel": level })),
                None => error(404, &format!("Site not found: {}", site)),
            },
            (HttpMethod::Put, ["sites", site]) => {
                state
                    .sites
                    .entry(site.to_string())
                    .or_insert_with(|| "siteUnverifiedUser".to_string());
                no_content()
            }
            (HttpMethod::Delete, ["sites", site]) => {
                if state.sites.remove(*site).is_none() {
                    return error(404, &format!("Site not found: {}", site));
                }
                state.sitemaps.retain(|(owner, _), _| owner.as_str() != *site);
                no_content()
            }
            (HttpMethod::Get, ["sites", site, "sitemaps"]) => {
                if !state.sites.contains_key(*site) {
                    return error(404, &format!("Site not found: {}", site));
                }
                let index = query
                    .and_then(|q| serde_urlencoded::from_str::<Vec<(String, String)>>(q).ok())
                    .and_then(|pairs| {
                        pairs
                            .into_iter()
                            .find(|(k, _)| k == "sitemapIndex")
                            .map(|(_, v)| v)
                    });
                let entries: Vec<Value> = state
                    .sitemaps
                    .iter()
                    .filter(|((owner, _), _)| owner.as_str() == *site)
                    .filter(|(_, sitemap)| {
                        index.is_none() || sitemap.get("index") == Some(&json!(index))
                    })
                    .map(|(_, sitemap)| sitemap.clone())
                    .collect();
                ok(json!({ "sitemap": entries }))
            }
            (method, ["sites", site, "sitemaps", feed]) => {
                if !state.sites.contains_key(*site) {
                    return error(404, &format!("Site not found: {}", site));
                }
                let key = (site.to_string(), feed.to_string());
                match method {
                    HttpMethod::Get => match state.sitemaps.get(&key) {
                        Some(sitemap) => ok(sitemap.clone()),
                        None => error(404, &format!("Sitemap not found: {}", feed)),
                    },
                    HttpMethod::Put => {
                        state.sitemaps.insert(
                            key,
                            json!({
                                "path": feed,
                                "lastSubmitted": chrono::Utc::now().to_rfc3339(),
                                "isPending": true,
                                "isSitemapsIndex": false,
                                "type": "sitemap",
                                "warnings": "0",
                                "errors": "0"
                            }),
                        );
                        no_content()
                    }
                    HttpMethod::Delete => match state.sitemaps.remove(&key) {
                        Some(_) => no_content(),
                        None => error(404, &format!("Sitemap not found: {}", feed)),
                    },
                    HttpMethod::Post => error(405, "Method not allowed"),
                }
            }
            (HttpMethod::Post, ["sites", site, "searchAnalytics", "query"]) => {
                if !state.sites.contains_key(*site) {
                    return error(404, &format!("Site not found: {}", site));
                }
                let dimensions = request
                    .body
                    .as_ref()
                    .and_then(|b| b.get("dimensions"))
                    .and_then(Value::as_array)
                    .map(|d| d.len())
                    .unwrap_or(0);
                let keys: Vec<String> = (0..dimensions).map(|i| format!("key-{}", i)).collect();
                ok(json!({
                    "rows": [{
                        "keys": keys,
                        "clicks": 12,
                        "impressions": 340,
                        "ctr": 0.035,
                        "position": 7.4
                    }],
                    "responseAggregationType": "byProperty"
                }))
            }
            _ => error(404, "Unknown webmasters endpoint"),
        }
    }

    fn inspect(&self, request: &ApiRequest) -> ApiResponse {
        let body = request.body.clone().unwrap_or(Value::Null);
        let site = body.get("siteUrl").and_then(Value::as_str).unwrap_or_default();
        let url = body
            .get("inspectionUrl")
            .and_then(Value::as_str)
            .unwrap_or_default();

        if !self.state.lock().unwrap().sites.contains_key(site) {
            return error(403, "You do not own this site, or the inspected URL is not part of this property.");
        }

        ok(json!({
            "inspectionResult": {
                "inspectionResultLink": format!("https://search.google.com/search-console/inspect?resource_id={}", site),
                "indexStatusResult": {
                    "verdict": "PASS",
                    "coverageState": "Submitted and indexed",
                    "googleCanonical": url
                }
            }
        }))
    }
}

#[async_trait]
impl HttpBackend for FakeBackend {
    async fn execute(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let response = self.route(&request);
        self.state.lock().unwrap().requests.push(request);
        Ok(response)
    }
}

fn ok(body: Value) -> ApiResponse {
    ApiResponse {
        status: 200,
        body: body.to_string(),
    }
}

fn no_content() -> ApiResponse {
    ApiResponse {
        status: 204,
        body: String::new(),
    }
}

fn error(status: u16, message: &str) -> ApiResponse {
    ApiResponse {
        status,
        body: json!({
            "error": { "code": status, "message": message, "errors": [{ "reason": "fake" }] }
        })
        .to_string(),
    }
}
