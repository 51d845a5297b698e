//! HTTP client for the UseScraper API.
//!
//! The client is constructed once at startup with the bearer credential and
//! base endpoint baked in, and is safe to share across concurrent tool
//! invocations. Each call is a single POST round trip with no retries.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::{debug, warn};

use super::error::ScraperError;
use super::types::ScrapeRequest;
use crate::core::config::ScraperConfig;

/// Preconfigured client for the UseScraper scraping endpoint.
pub struct ScraperClient {
    http: reqwest::Client,
    base_url: String,
}

impl ScraperClient {
    /// Build a client from the scraper configuration.
    ///
    /// The credential and content type become default headers, so every
    /// request carries them without per-call handling.
    pub fn new(config: &ScraperConfig) -> Result<Self, ScraperError> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Perform the scrape call.
    ///
    /// On HTTP success the response body is returned verbatim as opaque
    /// JSON. An error status becomes [`ScraperError::Api`], preferring the
    /// remote `message` field over a generic status description; transport
    /// failures become [`ScraperError::Transport`].
    pub async fn scrape(&self, request: &ScrapeRequest) -> Result<serde_json::Value, ScraperError> {
        debug!(url = %request.url, "Dispatching scrape request");

        let response = self
            .http
            .post(format!("{}/scrape", self.base_url))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| Some(body.get("message")?.as_str()?.to_string()))
            .unwrap_or_else(|| format!("request failed with status {status}"));

        warn!(%status, "UseScraper API returned an error");
        Err(ScraperError::Api { status, message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::scraper::ScrapeFormat;
    use serde_json::json;

    fn test_client(base_url: &str) -> ScraperClient {
        ScraperClient::new(&ScraperConfig {
            api_key: "test-key".to_string(),
            base_url: base_url.to_string(),
        })
        .unwrap()
    }

    fn minimal_request(url: &str) -> ScrapeRequest {
        ScrapeRequest {
            url: url.to_string(),
            format: ScrapeFormat::default(),
            advanced_proxy: false,
            extract_object: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_client_rejects_unprintable_api_key() {
        let result = ScraperClient::new(&ScraperConfig {
            api_key: "bad\nkey".to_string(),
            base_url: "https://api.usescraper.com/scraper".to_string(),
        });
        assert!(matches!(result, Err(ScraperError::Credential(_))));
    }

    #[tokio::test]
    async fn test_scrape_success_relays_body_verbatim() {
        let mut server = mockito::Server::new_async().await;
        let remote_body = json!({"status": "scraped", "text": "# Example"});
        let mock = server
            .mock("POST", "/scrape")
            .match_header("authorization", "Bearer test-key")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(remote_body.to_string())
            .create_async()
            .await;

        let client = test_client(&server.url());
        let body = client
            .scrape(&minimal_request("https://example.com"))
            .await
            .unwrap();

        assert_eq!(body, remote_body);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_scrape_sends_normalized_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/scrape")
            .match_body(mockito::Matcher::Json(json!({
                "url": "https://example.com",
                "format": "markdown",
                "advanced_proxy": false,
                "extract_object": {}
            })))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = test_client(&server.url());
        client
            .scrape(&minimal_request("https://example.com"))
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_scrape_error_prefers_remote_message() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/scrape")
            .with_status(402)
            .with_body(r#"{"message": "Insufficient credits"}"#)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let err = client
            .scrape(&minimal_request("https://example.com"))
            .await
            .unwrap_err();

        match err {
            ScraperError::Api { status, message } => {
                assert_eq!(status.as_u16(), 402);
                assert_eq!(message, "Insufficient credits");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_scrape_error_without_message_uses_generic_text() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/scrape")
            .with_status(500)
            .with_body("oops, not json")
            .create_async()
            .await;

        let client = test_client(&server.url());
        let err = client
            .scrape(&minimal_request("https://example.com"))
            .await
            .unwrap_err();

        match err {
            ScraperError::Api { status, message } => {
                assert_eq!(status.as_u16(), 500);
                assert!(message.contains("request failed with status 500"));
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_scrape_connection_failure_is_transport_error() {
        // Port 1 is never listening
        let client = test_client("http://127.0.0.1:1/scraper");
        let err = client
            .scrape(&minimal_request("https://example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, ScraperError::Transport(_)));
    }

    #[tokio::test]
    async fn test_base_url_trailing_slash_is_tolerated() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/scrape")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = test_client(&format!("{}/", server.url()));
        client
            .scrape(&minimal_request("https://example.com"))
            .await
            .unwrap();

        mock.assert_async().await;
    }
}
