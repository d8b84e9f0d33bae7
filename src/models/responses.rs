//! Response DTOs for the gallery server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// One public, client-facing gallery image.
///
/// Derived deterministically from a RemoteResource and never mutated after
/// creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryImage {
    /// Delivery-optimized image URL
    pub src: String,
    /// Human-readable label derived from the upstream identifier
    pub alt: String,
}

/// Response body for GET /api/gallery-images
#[derive(Debug, Clone, Serialize)]
pub struct GalleryResponse {
    /// The curated image list, possibly empty
    pub images: Vec<GalleryImage>,
}

impl GalleryResponse {
    /// Creates a new GalleryResponse
    pub fn new(images: Vec<GalleryImage>) -> Self {
        Self { images }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of requests served from cache
    pub hits: u64,
    /// Number of requests that had to refresh
    pub misses: u64,
    /// Number of successful upstream refreshes
    pub refreshes: u64,
    /// Number of images in the current snapshot
    pub cached_images: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(stats: &crate::cache::CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            refreshes: stats.refreshes,
            cached_images: stats.cached_images,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
