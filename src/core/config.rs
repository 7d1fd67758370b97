//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use super::transport::TransportConfig;
use crate::client::{DEFAULT_SEARCHCONSOLE_BASE_URL, DEFAULT_WEBMASTERS_BASE_URL};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Google API credentials.
    pub credentials: CredentialsConfig,

    /// Search Console API settings and the tool set to expose.
    pub api: ApiConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for Google API credentials.
///
/// Obtaining and refreshing the token is the caller's job; the server only
/// sends it as a bearer token.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// OAuth 2.0 access token with the `webmasters` scope.
    pub access_token: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// The generated tool set a server instance exposes.
///
/// Both sets cover the same API; they differ in tool names, argument naming
/// and how side-effecting calls report success.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppKind {
    /// `google_searchconsole`: camelCase arguments, `index_inspect_url`,
    /// upstream bodies returned verbatim.
    #[default]
    GoogleSearchconsole,

    /// `google_search_console`: snake_case arguments, `inspect_url`,
    /// confirmation objects for side effects.
    GoogleSearchConsole,
}

impl AppKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GoogleSearchconsole => "google_searchconsole",
            Self::GoogleSearchConsole => "google_search_console",
        }
    }
}

impl fmt::Display for AppKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "google_searchconsole" | "searchconsole" => Ok(Self::GoogleSearchconsole),
            "google_search_console" | "search_console" => Ok(Self::GoogleSearchConsole),
            other => Err(format!("Unknown app '{}'", other)),
        }
    }
}

/// Search Console API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Which tool set to expose.
    pub app: AppKind,

    /// Base URL of the webmasters v3 API.
    pub webmasters_base_url: String,

    /// Base URL of the Search Console v1 API (URL inspection).
    pub searchconsole_base_url: String,

    /// Request timeout passed to the HTTP client. `None` means no timeout.
    pub timeout_secs: Option<u64>,

    /// User-Agent header sent upstream.
    pub user_agent: String,
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            app: AppKind::default(),
            webmasters_base_url: DEFAULT_WEBMASTERS_BASE_URL.to_string(),
            searchconsole_base_url: DEFAULT_SEARCHCONSOLE_BASE_URL.to_string(),
            timeout_secs: Some(30),
            user_agent: format!("search-console-mcp/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "search-console-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            credentials: CredentialsConfig::default(),
            api: ApiConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_GSC_APP`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = parse_flag(&timestamps).unwrap_or(true);
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        // Access token, with the generic Google variable as a fallback
        let token = std::env::var("MCP_GSC_ACCESS_TOKEN")
            .or_else(|_| std::env::var("GOOGLE_ACCESS_TOKEN"))
            .ok()
            .filter(|t| !t.trim().is_empty());
        config.credentials.access_token = token;

        if let Ok(app) = std::env::var("MCP_GSC_APP") {
            match app.parse() {
                Ok(kind) => config.api.app = kind,
                Err(e) => warn!("{}; falling back to {}", e, config.api.app),
            }
        }

        if let Ok(url) = std::env::var("MCP_GSC_WEBMASTERS_URL") {
            config.api.webmasters_base_url = url;
        }

        if let Ok(url) = std::env::var("MCP_GSC_SEARCHCONSOLE_URL") {
            config.api.searchconsole_base_url = url;
        }

        if let Ok(secs) = std::env::var("MCP_GSC_TIMEOUT_SECS") {
            match secs.trim().parse::<u64>() {
                Ok(0) => config.api.timeout_secs = None,
                Ok(secs) => config.api.timeout_secs = Some(secs),
                Err(_) => warn!("Ignoring invalid MCP_GSC_TIMEOUT_SECS: {}", secs),
            }
        }

        if let Ok(agent) = std::env::var("MCP_GSC_USER_AGENT") {
            config.api.user_agent = agent;
        }

        config
    }
}

/// Parse a boolean-ish environment value (`1/0`, `true/false`, `yes/no`, `on/off`).
pub(crate) fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// Serializes tests that touch process environment variables.
#[cfg(test)]
pub(crate) static ENV_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
