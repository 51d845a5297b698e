//! UseScraper MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that exposes
//! the UseScraper web scraping API as a single callable tool.
//!
//! # Architecture
//!
//! - **core**: Infrastructure - configuration, error handling, the server
//!   handler, and the stdio transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: The `scrape` tool definition and router
//!   - **scraper**: The UseScraper API client and request/response types
//!
//! # Example
//!
//! ```rust,no_run
//! use usescraper_mcp_server::core::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
