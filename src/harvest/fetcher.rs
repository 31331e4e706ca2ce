//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the scraper, including:
//! - Building HTTP clients with the configured timeout
//! - GET requests for listing and item pages
//! - Error classification (timeout vs other transport failures)

use crate::config::Config;
use crate::{Result, ScrapeError};
use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client with the configured timeouts
///
/// The total request timeout comes from the configuration (default 100
/// seconds); redirects follow reqwest's default policy.
///
/// # Arguments
///
/// * `config` - The scraper configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use storyrake::config::Config;
/// use storyrake::harvest::build_http_client;
///
/// let client = build_http_client(&Config::default()).unwrap();
/// ```
pub fn build_http_client(config: &Config) -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(config.scraper.request_timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns the response body as text
///
/// The response status is deliberately not inspected: whatever body the
/// server returns is handed to the extractors, which treat content without
/// recognizable rows as an empty page. No retry.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(String)` - The full response body
/// * `Err(ScrapeError)` - Timeout or other transport failure
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    response.text().await.map_err(|e| classify_error(url, e))
}

/// Maps a transport error onto the scraper error taxonomy
fn classify_error(url: &str, error: reqwest::Error) -> ScrapeError {
    if error.is_timeout() {
        ScrapeError::Timeout {
            url: url.to_string(),
        }
    } else {
        ScrapeError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}
