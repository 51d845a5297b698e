//! Domain modules containing the business logic of the server.
//!
//! - **tools**: MCP tool definitions and routing
//! - **scraper**: UseScraper API client and request/response types

pub mod scraper;
pub mod tools;
