//! Web scraping tool backed by the UseScraper API.
//!
//! Accepts a URL plus optional format, proxy, and extraction parameters,
//! forwards the normalized request to the remote scraping service, and
//! relays the response (or a formatted error) back to the caller.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domains::scraper::{ScrapeFormat, ScrapeRequest, ScraperClient, ScraperError};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the scrape tool.
///
/// Deserializing this struct is the argument validation: `url` must be a
/// string, `format` must be one of the three allowed values, and the
/// optional fields apply their documented defaults when absent.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ScrapeParams {
    /// URL to scrape.
    #[schemars(description = "URL to scrape")]
    pub url: String,

    /// Output format (default: markdown).
    #[serde(default)]
    #[schemars(
        description = "Format to save crawled page content. Strongly recommended to keep as markdown for optimal AI processing (default: markdown)"
    )]
    pub format: ScrapeFormat,

    /// Whether to use the advanced proxy (default: false).
    #[serde(default)]
    #[schemars(description = "Use advanced proxy to circumvent bot detection (default: false)")]
    pub advanced_proxy: bool,

    /// Extraction specification, forwarded verbatim (default: {}).
    #[serde(default)]
    #[schemars(description = "Optional object specifying data to extract")]
    pub extract_object: serde_json::Map<String, serde_json::Value>,
}

impl ScrapeParams {
    /// Normalize into the wire request, with all defaults applied.
    fn into_request(self) -> ScrapeRequest {
        ScrapeRequest {
            url: self.url,
            format: self.format,
            advanced_proxy: self.advanced_proxy,
            extract_object: self.extract_object,
        }
    }
}

// ============================================================================
// Tool Implementation
// ============================================================================

/// Scrape tool implementation.
#[derive(Debug, Clone)]
pub struct ScrapeTool;

impl ScrapeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "scrape";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Scrape content from a webpage using UseScraper API";

    /// Execute the tool logic.
    ///
    /// Remote API failures (error responses and transport errors) become
    /// error tool results and the session continues; any other failure is
    /// propagated as a protocol error rather than converted into a result.
    pub async fn execute(
        params: ScrapeParams,
        client: &ScraperClient,
    ) -> Result<CallToolResult, McpError> {
        info!(url = %params.url, "Scrape tool called");

        let request = params.into_request();

        match client.scrape(&request).await {
            Ok(body) => {
                let text = serde_json::to_string_pretty(&body)
                    .map_err(|e| McpError::internal_error(e.to_string(), None))?;
                Ok(CallToolResult::success(vec![Content::text(text)]))
            }
            Err(e @ (ScraperError::Api { .. } | ScraperError::Transport(_))) => {
                warn!("UseScraper API error: {}", e);
                Ok(CallToolResult::error(vec![Content::text(format!(
                    "UseScraper API error: {}",
                    e
                ))]))
            }
            Err(e) => Err(McpError::internal_error(e.to_string(), None)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ScrapeParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the stdio transport.
    pub fn create_route<S>(client: Arc<ScraperClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move {
                let params: ScrapeParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Self::execute(params, &client).await
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
