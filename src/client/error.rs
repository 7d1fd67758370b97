//! Errors returned by the Search Console client.
//!
//! Upstream failures are classified by HTTP status into the taxonomy the
//! Search Console API itself uses. Nothing here retries or recovers; the
//! classification only gives callers a stable `kind` to branch on.

use serde::Deserialize;
use thiserror::Error;

/// Result type for Search Console client operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Reasons Google reports (inside a 403) when a quota or rate limit is hit.
const RATE_LIMIT_REASONS: &[&str] = &[
    "rateLimitExceeded",
    "userRateLimitExceeded",
    "quotaExceeded",
    "dailyLimitExceeded",
];

/// Errors that can occur while calling the Search Console API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required parameter was not supplied (or was blank).
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// A parameter was supplied but failed local validation.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Credentials are missing, invalid, or lack permission.
    #[error("Authentication failed ({status}): {message}")]
    Auth { status: u16, message: String },

    /// The requested site or sitemap does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The request was rejected as malformed (400-class).
    #[error("Bad request ({status}): {message}")]
    BadRequest { status: u16, message: String },

    /// A rate limit or quota was exceeded.
    #[error("Rate limit exceeded ({status}): {message}")]
    RateLimited { status: u16, message: String },

    /// The upstream service failed (5xx).
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Any other non-2xx response.
    #[error("HTTP error ({status}): {message}")]
    Http { status: u16, message: String },

    /// The HTTP client could not complete the request.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body was not the JSON we expected.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Google's JSON error envelope: `{"error": {"code", "message", "errors": [...]}}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Vec<ErrorItem>,
}

#[derive(Debug, Deserialize)]
struct ErrorItem {
    #[serde(default)]
    reason: Option<String>,
}

impl ApiError {
    /// Create a "missing parameter" error.
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingParameter(name.into())
    }

    /// Create an "invalid parameter" error.
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Error used when no access token is configured.
    pub fn no_credentials() -> Self {
        Self::Auth {
            status: 401,
            message: "No access token configured (set MCP_GSC_ACCESS_TOKEN)".to_string(),
        }
    }

    /// Classify a non-2xx response.
    pub fn from_status(status: u16, body: &str) -> Self {
        let (message, reasons) = parse_error_body(body);
        let message = message.unwrap_or_else(|| format!("HTTP {}", status));

        match status {
            429 => Self::RateLimited { status, message },
            403 if reasons.iter().any(|r| RATE_LIMIT_REASONS.contains(&r.as_str())) => {
                Self::RateLimited { status, message }
            }
            401 | 403 => Self::Auth { status, message },
            404 => Self::NotFound(message),
            400..=499 => Self::BadRequest { status, message },
            500..=599 => Self::Server { status, message },
            _ => Self::Http { status, message },
        }
    }

    /// Whether the error was raised locally, before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingParameter(_) | Self::InvalidParameter { .. }
        )
    }

    /// Short machine-readable kind, stable across versions.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingParameter(_) => "missing_parameter",
            Self::InvalidParameter { .. } => "invalid_parameter",
            Self::Auth { .. } => "auth",
            Self::NotFound(_) => "not_found",
            Self::BadRequest { .. } => "bad_request",
            Self::RateLimited { .. } => "rate_limited",
            Self::Server { .. } => "server",
            Self::Http { .. } => "http",
            Self::Transport(_) => "transport",
            Self::Decode(_) => "decode",
        }
    }

    /// The upstream HTTP status, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth { status, .. }
            | Self::BadRequest { status, .. }
            | Self::RateLimited { status, .. }
            | Self::Server { status, .. }
            | Self::Http { status, .. } => Some(*status),
            Self::NotFound(_) => Some(404),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Pull the message and reasons out of a Google error body.
///
/// Bodies that are not the JSON envelope fall back to their trimmed text.
fn parse_error_body(body: &str) -> (Option<String>, Vec<String>) {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => {
            let reasons = envelope
                .error
                .errors
                .into_iter()
                .filter_map(|e| e.reason)
                .collect();
            (envelope.error.message, reasons)
        }
        Err(_) => {
            let text = body.trim();
            let message = (!text.is_empty()).then(|| text.to_string());
            (message, Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(code: u16, message: &str, reason: &str) -> String {
        serde_json::json!({
            "error": {
                "code": code,
                "message": message,
                "errors": [{ "reason": reason, "domain": "usageLimits" }]
            }
        })
        .to_string()
    }

    #[test]
    fn test_classify_auth() {
        let err = ApiError::from_status(401, &envelope(401, "Invalid Credentials", "authError"));
        assert_eq!(err.kind(), "auth");
        assert!(err.to_string().contains("Invalid Credentials"));

        let err = ApiError::from_status(403, &envelope(403, "Forbidden", "forbidden"));
        assert_eq!(err.kind(), "auth");
    }

    #[test]
    fn test_classify_quota_403_as_rate_limited() {
        let err = ApiError::from_status(403, &envelope(403, "Quota", "quotaExceeded"));
        assert_eq!(err.kind(), "rate_limited");
        assert_eq!(err.status(), Some(403));
    }

    #[test]
    fn test_classify_statuses() {
        assert_eq!(ApiError::from_status(404, "").kind(), "not_found");
        assert_eq!(ApiError::from_status(400, "").kind(), "bad_request");
        assert_eq!(ApiError::from_status(409, "").kind(), "bad_request");
        assert_eq!(ApiError::from_status(429, "").kind(), "rate_limited");
        assert_eq!(ApiError::from_status(503, "").kind(), "server");
        assert_eq!(ApiError::from_status(302, "").kind(), "http");
    }

    #[test]
    fn test_plain_text_body_becomes_message() {
        let err = ApiError::from_status(500, "  backend unavailable \n");
        assert!(err.to_string().contains("backend unavailable"));

        let err = ApiError::from_status(500, "");
        assert!(err.to_string().contains("HTTP 500"));
    }

    #[test]
    fn test_validation_errors() {
        assert!(ApiError::missing("siteUrl").is_validation());
        assert!(ApiError::invalid("startDate", "bad").is_validation());
        assert!(!ApiError::from_status(404, "").is_validation());
        assert_eq!(ApiError::missing("x").status(), None);
    }
}
