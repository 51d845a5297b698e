//! Tool definitions.
//!
//! One file per tool. Each tool defines its parameters struct, an
//! `execute()` method with the core logic, and a `create_route()` used by
//! the router.

mod scrape;

pub use scrape::{ScrapeParams, ScrapeTool};
