//! Scraper-specific error types.

use thiserror::Error;

/// Errors raised while calling the UseScraper API.
///
/// Both variants represent expected failure modes of the remote call and
/// are converted into error tool results at the call site. Anything else
/// (e.g. a serialization defect) is not a `ScraperError` and propagates to
/// the protocol layer instead.
#[derive(Debug, Error)]
pub enum ScraperError {
    /// The remote service answered with an error status. Carries the
    /// remote-provided message when the body had one, otherwise a generic
    /// status description.
    #[error("{message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    /// Transport-level failure contacting the remote service.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The configured credential cannot be used as an HTTP header value.
    #[error("invalid API key: {0}")]
    Credential(#[from] reqwest::header::InvalidHeaderValue),
}
