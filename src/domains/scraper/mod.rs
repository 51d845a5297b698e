//! UseScraper API domain.
//!
//! This module holds the remote call adapter for the UseScraper scraping
//! service: the request types sent over the wire and the preconfigured
//! HTTP client that performs the outbound call.

mod client;
mod error;
mod types;

pub use client::ScraperClient;
pub use error::ScraperError;
pub use types::{ScrapeFormat, ScrapeRequest};
