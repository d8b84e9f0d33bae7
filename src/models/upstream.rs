//! Upstream DTOs
//!
//! Defines the shape of the asset-hosting listing API response.

use serde::Deserialize;

/// One asset as reported by the upstream listing API.
///
/// An immutable per-request snapshot; never persisted. `format` and
/// `resource_type` are optional because the listing API omits them for some
/// derived asset kinds.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteResource {
    /// Upstream identifier, a slash-separated path (e.g. `portraits/IMG_0042`)
    pub public_id: String,
    /// HTTPS delivery URL as reported upstream
    pub secure_url: String,
    /// File format (e.g. `jpg`), if reported
    #[serde(default)]
    pub format: Option<String>,
    /// Resource kind (e.g. `image`, `video`), if reported
    #[serde(default)]
    pub resource_type: Option<String>,
}

/// Envelope of the listing endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingResponse {
    /// The page of resources; missing field means an empty page
    #[serde(default)]
    pub resources: Vec<RemoteResource>,
}
