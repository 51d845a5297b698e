//! UseScraper MCP Server Entry Point
//!
//! Initializes logging, loads configuration (including the required
//! UseScraper API credential), and serves the MCP protocol over stdio.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use usescraper_mcp_server::core::{Config, McpServer, transport::StdioTransport};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment. A missing USESCRAPER_API_KEY
    // aborts here, before any transport is connected.
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    // Create the MCP server with its preconfigured scraper client
    let server = McpServer::new(config)?;

    info!("Server initialized");

    // Serve over stdio until EOF or interrupt
    StdioTransport::run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level, writing to stderr so
/// stdout stays reserved for the MCP protocol.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
