//! Search Console MCP Server Entry Point
//!
//! Loads configuration from the environment (and `.env`), initializes
//! logging on stderr, and serves the configured Search Console app over the
//! selected transport.

use anyhow::{Context, Result};
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use search_console_mcp_server::core::{Config, LoggingConfig, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    init_logging(&config.logging);

    info!("Starting {} v{}", config.server.name, config.server.version);
    if config.credentials.access_token.is_none() {
        warn!(
            "No access token configured. Set MCP_GSC_ACCESS_TOKEN to an OAuth token \
             with the https://www.googleapis.com/auth/webmasters scope"
        );
    }

    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::new(config).context("Failed to initialize server")?;

    info!("Server initialized");

    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// `RUST_LOG` directives win over `MCP_LOG_LEVEL`. Output always goes to
/// stderr since stdout belongs to the stdio transport.
fn init_logging(logging: &LoggingConfig) {
    let level = match logging.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if logging.with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
