//! Search Console MCP Server Library
//!
//! A Model Context Protocol (MCP) server that exposes the Google Search
//! Console API (sites, sitemaps, search analytics, URL inspection) as tools.
//!
//! # Architecture
//!
//! - **client**: async Search Console API client and its HTTP backend seam
//! - **core**: configuration, error handling, the MCP server and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: one tool set per Search Console app, chosen by `MCP_GSC_APP`
//!   - **resources**: server summary, operation catalog, query reference
//!   - **prompts**: guided Search Console workflows
//!
//! # Example
//!
//! ```rust,no_run
//! use search_console_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let transport = TransportService::new(config.transport.clone());
//!     let server = McpServer::new(config)?;
//!     transport.run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use client::{ApiError, SearchConsoleClient};
pub use core::{AppKind, Config, Error, McpServer, Result};
