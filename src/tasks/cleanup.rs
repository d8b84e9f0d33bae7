//! TTL Cleanup Task
//!
//! Background task that drops the cached gallery snapshot once it expires.
//! Expiry is already enforced lazily on read; this task only keeps an
//! abandoned gallery from pinning its last image list in memory.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::GalleryCache;

/// Spawns a background task that periodically evicts an expired snapshot.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between checks. It acquires a write lock on the cache only long enough to
/// drop the slot.
///
/// # Arguments
/// * `cache` - Shared handle to the gallery cache
/// * `cleanup_interval_secs` - Interval in seconds between checks
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_cleanup_task(
    cache: Arc<RwLock<GalleryCache>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Acquire write lock and drop the snapshot if expired
            let evicted = {
                let mut cache_guard = cache.write().await;
                cache_guard.evict_expired()
            };

            if evicted {
                info!("TTL cleanup: dropped expired gallery snapshot");
            } else {
                debug!("TTL cleanup: snapshot still valid or slot empty");
            }
        }
    })
}
