//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. Tool routing is built dynamically from the tool definitions in
//! `domains/tools/definitions/`; the shared UseScraper client is constructed
//! once here and handed to the routes, so it is read-only across calls.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;

use super::config::Config;
use crate::domains::scraper::ScraperClient;
use crate::domains::tools::build_tool_router;

/// The main MCP server handler.
///
/// Implements the `ServerHandler` trait from rmcp and routes tool calls to
/// the registered tool definitions.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails if the scraper client cannot be built from the configured
    /// credential.
    pub fn new(config: Config) -> crate::core::Result<Self> {
        let config = Arc::new(config);
        let client = Arc::new(ScraperClient::new(&config.scraper)?);

        Ok(Self {
            tool_router: build_tool_router::<Self>(client),
            config,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// List all available tools as plain JSON metadata.
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "This server scrapes web pages through the UseScraper API. \
                 Use the 'scrape' tool with a URL to fetch page content as \
                 markdown, html, or text."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
