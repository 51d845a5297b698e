//! Wire types for the UseScraper API.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for scraped page content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScrapeFormat {
    /// Plain text extraction.
    Text,

    /// Raw page HTML.
    Html,

    /// Markdown conversion, the recommended format for AI processing.
    #[default]
    Markdown,
}

/// A fully normalized scrape request, as posted to the UseScraper API.
///
/// All four keys are always serialized, with defaults already applied, so
/// the outbound body is identical for equivalent caller inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeRequest {
    /// Target URL to scrape.
    pub url: String,

    /// Output format for the page content.
    pub format: ScrapeFormat,

    /// Whether to route through the advanced anti-bot proxy.
    pub advanced_proxy: bool,

    /// Open-ended extraction specification, forwarded verbatim.
    pub extract_object: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_serializes_lowercase() {
        assert_eq!(serde_json::to_value(ScrapeFormat::Text).unwrap(), "text");
        assert_eq!(serde_json::to_value(ScrapeFormat::Html).unwrap(), "html");
        assert_eq!(
            serde_json::to_value(ScrapeFormat::Markdown).unwrap(),
            "markdown"
        );
    }

    #[test]
    fn test_format_default_is_markdown() {
        assert_eq!(ScrapeFormat::default(), ScrapeFormat::Markdown);
    }

    #[test]
    fn test_format_rejects_unknown_value() {
        assert!(serde_json::from_value::<ScrapeFormat>(json!("pdf")).is_err());
        assert!(serde_json::from_value::<ScrapeFormat>(json!("Markdown")).is_err());
    }

    #[test]
    fn test_request_serializes_all_four_keys() {
        let request = ScrapeRequest {
            url: "https://example.com".to_string(),
            format: ScrapeFormat::default(),
            advanced_proxy: false,
            extract_object: serde_json::Map::new(),
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "url": "https://example.com",
                "format": "markdown",
                "advanced_proxy": false,
                "extract_object": {}
            })
        );
    }

    #[test]
    fn test_request_forwards_extraction_spec_verbatim() {
        let spec = json!({"title": {"selector": "h1"}, "price": "css:.price"});
        let request = ScrapeRequest {
            url: "https://x.com".to_string(),
            format: ScrapeFormat::Html,
            advanced_proxy: true,
            extract_object: spec.as_object().unwrap().clone(),
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["format"], "html");
        assert_eq!(body["advanced_proxy"], true);
        assert_eq!(body["extract_object"], spec);
    }
}
