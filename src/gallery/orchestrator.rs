//! Aggregation Orchestrator Module
//!
//! The single entry point of the gallery pipeline: cache check, config
//! resolution, upstream fetch, classification and mapping, cache write.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

use crate::cache::{CacheStats, GalleryCache, CACHE_TTL};
use crate::config::{ConfigSource, GalleryConfig};
use crate::error::Result;
use crate::gallery::{classifier, mapper};
use crate::models::{GalleryImage, RemoteResource};
use crate::upstream::ListingClient;

// == Curate ==
/// Runs the classifier and mapper over one upstream page, in order.
///
/// Accumulation stops as soon as `max_images` resources have been accepted;
/// the remainder of the page is not examined, so the result is biased toward
/// assets appearing earlier in the upstream listing. Output preserves
/// first-seen order.
pub fn curate(resources: &[RemoteResource], config: &GalleryConfig) -> Vec<GalleryImage> {
    let folder_configured = config.folder_prefix.is_some();
    let mut images = Vec::new();

    for resource in resources {
        if !classifier::accepts(resource, folder_configured) {
            continue;
        }

        images.push(GalleryImage {
            src: mapper::delivery_url(&resource.secure_url),
            alt: mapper::alt_text(&resource.public_id),
        });

        if images.len() >= config.max_images {
            break;
        }
    }

    images
}

// == Gallery Orchestrator ==
/// Composes cache, config, client, classifier and mapper into the end-to-end
/// gallery operation.
///
/// Concurrent cache misses are deduplicated: the refresh lock ensures a
/// single in-flight upstream request, and waiters resolve from the snapshot
/// it writes. A failed refresh never writes, overwrites, or clears the slot,
/// so a still-valid snapshot survives transient upstream failures.
pub struct GalleryOrchestrator {
    /// Single-slot snapshot cache, shared with the cleanup task
    cache: Arc<RwLock<GalleryCache>>,
    /// Single-flight guard around the miss-fetch-write sequence
    refresh_lock: Mutex<()>,
    /// Per-request credential source
    config: ConfigSource,
    /// Upstream listing client
    client: ListingClient,
}

impl GalleryOrchestrator {
    // == Constructors ==
    /// Creates an orchestrator with the standard 5-minute snapshot TTL.
    pub fn new(config: ConfigSource, client: ListingClient) -> Self {
        Self::with_ttl(config, client, CACHE_TTL)
    }

    /// Creates an orchestrator with a custom snapshot TTL.
    pub fn with_ttl(config: ConfigSource, client: ListingClient, ttl: Duration) -> Self {
        Self {
            cache: Arc::new(RwLock::new(GalleryCache::new(ttl))),
            refresh_lock: Mutex::new(()),
            config,
            client,
        }
    }

    /// Shared handle to the cache slot, for the background cleanup task.
    pub fn cache(&self) -> Arc<RwLock<GalleryCache>> {
        Arc::clone(&self.cache)
    }

    // == Gallery Images ==
    /// Returns the curated gallery, refreshing from upstream on a cache miss.
    ///
    /// # Errors
    /// Surfaces `MissingCredentials`, `Upstream`, and `Transport` failures
    /// directly; none of them touch the cache.
    pub async fn gallery_images(&self) -> Result<Vec<GalleryImage>> {
        if let Some(images) = self.cache.write().await.get() {
            debug!(count = images.len(), "serving gallery from cache");
            return Ok(images);
        }

        let _guard = self.refresh_lock.lock().await;

        // A concurrent request may have refreshed while we waited for the lock.
        if self.cache.read().await.is_warm() {
            if let Some(images) = self.cache.write().await.get() {
                debug!(count = images.len(), "serving gallery refreshed by concurrent request");
                return Ok(images);
            }
        }

        let config = self.config.resolve()?;
        let resources = self.client.list_resources(&config).await?;
        let images = curate(&resources, &config);

        info!(
            fetched = resources.len(),
            accepted = images.len(),
            cap = config.max_images,
            "gallery refreshed from upstream"
        );

        self.cache.write().await.put(images.clone());
        Ok(images)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }
}
