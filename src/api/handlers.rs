//! API Handlers
//!
//! HTTP request handlers for each gallery server endpoint.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::config::ConfigSource;
use crate::error::Result;
use crate::gallery::GalleryOrchestrator;
use crate::models::{GalleryResponse, HealthResponse, StatsResponse};
use crate::upstream::ListingClient;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The aggregation pipeline behind every gallery request
    pub orchestrator: Arc<GalleryOrchestrator>,
}

impl AppState {
    /// Creates a new AppState around the given orchestrator.
    pub fn new(orchestrator: GalleryOrchestrator) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
        }
    }

    /// Creates the production AppState: env-resolved config, real upstream.
    pub fn from_env() -> Self {
        Self::new(GalleryOrchestrator::new(
            ConfigSource::Env,
            ListingClient::new(),
        ))
    }
}

/// Handler for GET /api/gallery-images
///
/// Serves the curated gallery, from cache when a snapshot is still valid,
/// otherwise via a full upstream refresh. Every failure surfaces as a 500
/// with a diagnostic body; the cache is never touched on failure.
pub async fn gallery_images_handler(
    State(state): State<AppState>,
) -> Result<Json<GalleryResponse>> {
    let images = state.orchestrator.gallery_images().await?;
    Ok(Json(GalleryResponse::new(images)))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.orchestrator.stats().await;
    Json(StatsResponse::new(&stats))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GalleryConfig;

    fn cold_state() -> AppState {
        // Nothing listens on this port; only cache-independent paths succeed.
        let config = GalleryConfig {
            account_id: "acct".to_string(),
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
            folder_prefix: None,
            max_images: 30,
        };
        AppState::new(GalleryOrchestrator::new(
            ConfigSource::Fixed(config),
            ListingClient::with_base_url("http://127.0.0.1:1"),
        ))
    }

    #[tokio::test]
    async fn test_gallery_handler_cold_cache_unreachable_upstream() {
        let result = gallery_images_handler(State(cold_state())).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_stats_handler_starts_at_zero() {
        let response = stats_handler(State(cold_state())).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.refreshes, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
