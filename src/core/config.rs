//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables at startup. The configuration is built once and is
//! read-only for the process lifetime.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::{Error, Result};

/// Default base endpoint for the UseScraper API.
const DEFAULT_BASE_URL: &str = "https://api.usescraper.com/scraper";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// UseScraper API configuration.
    pub scraper: ScraperConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the UseScraper API client.
#[derive(Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Bearer credential for the UseScraper API. Required.
    pub api_key: String,

    /// Base endpoint of the UseScraper API.
    pub base_url: String,
}

/// Custom Debug implementation to redact the credential from logs.
impl std::fmt::Debug for ScraperConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScraperConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `USESCRAPER_API_KEY` is required; startup fails if it is unset or
    /// empty. `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, and `USESCRAPER_BASE_URL`
    /// are optional overrides.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var("USESCRAPER_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                Error::config("USESCRAPER_API_KEY environment variable is required")
            })?;

        let base_url = match std::env::var("USESCRAPER_BASE_URL") {
            Ok(url) => {
                info!("Using UseScraper endpoint override: {}", url);
                url
            }
            Err(_) => DEFAULT_BASE_URL.to_string(),
        };

        let name = std::env::var("MCP_SERVER_NAME")
            .unwrap_or_else(|_| "usescraper-server".to_string());

        let level = std::env::var("MCP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            server: ServerConfig {
                name,
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig { level },
            scraper: ScraperConfig { api_key, base_url },
        })
    }

    /// Build a configuration directly from its parts, bypassing the
    /// environment. Used by tests and embedders.
    pub fn with_scraper(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            server: ServerConfig {
                name: "usescraper-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            scraper: ScraperConfig {
                api_key: api_key.into(),
                base_url: base_url.into(),
            },
        }
    }
}
