//! Listing Client Module
//!
//! Thin authenticated client for the asset-hosting listing API. One request
//! per cache refresh: no retries, no pagination beyond the first page.

use crate::config::GalleryConfig;
use crate::error::{GalleryError, Result};
use crate::models::{ListingResponse, RemoteResource};
use crate::upstream::{DEFAULT_BASE_URL, PAGE_SIZE};

// == Listing Client ==
/// Client for the upstream image listing endpoint.
#[derive(Debug, Clone)]
pub struct ListingClient {
    /// Shared reqwest client (connection pooling)
    http: reqwest::Client,
    /// API origin, overridable so tests can point at a local mock server
    base_url: String,
}

impl ListingClient {
    // == Constructors ==
    /// Creates a client against the production listing API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom API origin.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    // == List Resources ==
    /// Fetches one page of image-type uploads for the configured account.
    ///
    /// Requests a fixed page size of 120, restricted to the configured folder
    /// prefix when one is set, authenticated with HTTP Basic (key:secret).
    ///
    /// # Errors
    /// - `GalleryError::Upstream` on any non-2xx response, with the raw
    ///   response body preserved for diagnostics
    /// - `GalleryError::Transport` on network failure or a malformed body
    pub async fn list_resources(&self, config: &GalleryConfig) -> Result<Vec<RemoteResource>> {
        let url = self.listing_url(&config.account_id);
        let page_size = PAGE_SIZE.to_string();

        let mut request = self
            .http
            .get(&url)
            .basic_auth(&config.api_key, Some(&config.api_secret))
            .query(&[("type", "upload"), ("max_results", page_size.as_str())]);
        if let Some(prefix) = &config.folder_prefix {
            request = request.query(&[("prefix", prefix.as_str())]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| GalleryError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GalleryError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let listing: ListingResponse = response
            .json()
            .await
            .map_err(|e| GalleryError::Transport(e.to_string()))?;

        Ok(listing.resources)
    }

    // == URL Construction ==
    /// Builds the listing endpoint URL for an account.
    fn listing_url(&self, account_id: &str) -> String {
        format!("{}/v1_1/{}/resources/image", self.base_url, account_id)
    }
}

impl Default for ListingClient {
    fn default() -> Self {
        Self::new()
    }
}

// == Unit Tests ==
// The request/response cycle itself is covered by the wiremock-backed
// integration tests; these only pin down URL construction.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_url_shape() {
        let client = ListingClient::new();
        assert_eq!(
            client.listing_url("demo-account"),
            "https://api.cloudinary.com/v1_1/demo-account/resources/image"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ListingClient::with_base_url("http://127.0.0.1:9999/");
        assert_eq!(
            client.listing_url("acct"),
            "http://127.0.0.1:9999/v1_1/acct/resources/image"
        );
    }
}
