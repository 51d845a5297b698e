//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module only wires them
//! together. Calls to names without a route are answered by rmcp with
//! method-not-found semantics and never reach any tool logic.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::ScrapeTool;
use crate::domains::scraper::ScraperClient;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<ScraperClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new().with_route(ScrapeTool::create_route(client))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ScraperConfig;

    struct TestServer {}

    fn test_client() -> Arc<ScraperClient> {
        Arc::new(
            ScraperClient::new(&ScraperConfig {
                api_key: "test-key".to_string(),
                base_url: "http://127.0.0.1:1/scraper".to_string(),
            })
            .unwrap(),
        )
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let tools = router.list_all();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name.as_ref(), "scrape");
    }

    #[test]
    fn test_router_has_no_other_routes() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let names: Vec<_> = router
            .list_all()
            .iter()
            .map(|t| t.name.to_string())
            .collect();
        assert!(!names.contains(&"fetch".to_string()));
        assert!(!names.contains(&"crawl".to_string()));
    }
}
