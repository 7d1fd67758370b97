//! HTTP backend seam.
//!
//! The client builds fully-formed [`ApiRequest`]s and hands them to an
//! [`HttpBackend`]. Production uses [`ReqwestBackend`]; tests substitute an
//! in-memory backend so no network is needed.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::error::{ApiError, ApiResult};
use super::operations::HttpMethod;

/// A request ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Absolute URL, including any query string.
    pub url: String,
    pub body: Option<Value>,
}

/// Status and raw body of a completed request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes requests against the Search Console API.
///
/// Implementations only move bytes; status classification and decoding
/// happen in the client.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> ApiResult<ApiResponse>;
}

/// `reqwest`-based backend authenticating with a bearer token.
#[derive(Clone)]
pub struct ReqwestBackend {
    http: reqwest::Client,
    access_token: Option<String>,
}

impl std::fmt::Debug for ReqwestBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestBackend")
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl ReqwestBackend {
    /// Build a backend with an optional request timeout and user agent.
    pub fn new(
        access_token: Option<String>,
        timeout: Option<Duration>,
        user_agent: &str,
    ) -> ApiResult<Self> {
        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, access_token })
    }

    /// Wrap an already configured `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, access_token: Option<String>) -> Self {
        Self { http, access_token }
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn execute(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let token = self
            .access_token
            .as_deref()
            .ok_or_else(ApiError::no_credentials)?;

        let builder = match request.method {
            HttpMethod::Get => self.http.get(&request.url),
            HttpMethod::Post => self.http.post(&request.url),
            HttpMethod::Put => self.http.put(&request.url),
            HttpMethod::Delete => self.http.delete(&request.url),
        };

        let builder = builder.bearer_auth(token);
        let builder = match &request.body {
            Some(body) => builder.json(body),
            // Google rejects body-less PUTs without an explicit length.
            None if request.method == HttpMethod::Put => builder.header("Content-Length", "0"),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(
            "{} {} -> {} ({} bytes)",
            request.method.as_str(),
            request.url,
            status,
            body.len()
        );

        Ok(ApiResponse { status, body })
    }
}
