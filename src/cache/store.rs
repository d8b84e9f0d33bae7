//! Cache Store Module
//!
//! Single-slot gallery cache with fixed-TTL expiry. Holds at most one curated
//! snapshot at a time; a successful refresh replaces the whole slot.

use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats};
use crate::models::GalleryImage;

// == Gallery Cache ==
/// Process-wide cache for the curated gallery.
///
/// Lifecycle: empty at construction, replaced wholesale on every successful
/// refresh, never written on failure. There is no eviction beyond TTL expiry.
#[derive(Debug)]
pub struct GalleryCache {
    /// The single cached snapshot, if any
    slot: Option<CacheEntry>,
    /// Fixed lifetime of every snapshot
    ttl: Duration,
    /// Performance statistics
    stats: CacheStats,
}

impl GalleryCache {
    // == Constructor ==
    /// Creates an empty GalleryCache whose snapshots live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            slot: None,
            ttl,
            stats: CacheStats::new(),
        }
    }

    // == Get ==
    /// Returns the cached image list iff a snapshot exists and is unexpired.
    ///
    /// An expired snapshot counts as a miss but is left in place; the next
    /// successful refresh (or the cleanup task) replaces it.
    pub fn get(&mut self) -> Option<Vec<GalleryImage>> {
        match &self.slot {
            Some(entry) if !entry.is_expired() => {
                self.stats.record_hit();
                Some(entry.images.clone())
            }
            _ => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Put ==
    /// Replaces the slot with a new snapshot expiring `ttl` from now.
    pub fn put(&mut self, images: Vec<GalleryImage>) {
        self.stats.set_cached_images(images.len());
        self.stats.record_refresh();
        self.slot = Some(CacheEntry::new(images, self.ttl));
    }

    // == Evict Expired ==
    /// Drops the snapshot if it has expired.
    ///
    /// Returns true if an expired snapshot was removed. Used by the background
    /// cleanup task so an abandoned gallery does not pin its last image list
    /// in memory forever.
    pub fn evict_expired(&mut self) -> bool {
        if self.slot.as_ref().is_some_and(|entry| entry.is_expired()) {
            self.slot = None;
            self.stats.set_cached_images(0);
            true
        } else {
            false
        }
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.clone()
    }

    // == Is Warm ==
    /// Returns true if an unexpired snapshot is present.
    pub fn is_warm(&self) -> bool {
        self.slot.as_ref().is_some_and(|entry| !entry.is_expired())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    fn images(n: usize) -> Vec<GalleryImage> {
        (0..n)
            .map(|i| GalleryImage {
                src: format!("https://host/res/upload/f_auto,q_auto,w_1200/img_{}.jpg", i),
                alt: format!("img {}", i),
            })
            .collect()
    }

    #[test]
    fn test_cache_starts_empty() {
        let mut cache = GalleryCache::new(Duration::from_secs(300));
        assert!(!cache.is_warm());
        assert!(cache.get().is_none());
    }

    #[test]
    fn test_put_then_get_returns_same_list() {
        let mut cache = GalleryCache::new(Duration::from_secs(300));

        cache.put(images(3));
        let cached = cache.get().expect("snapshot should be servable");

        assert_eq!(cached.len(), 3);
        assert_eq!(cached[0].alt, "img 0");
    }

    #[test]
    fn test_put_replaces_whole_slot() {
        let mut cache = GalleryCache::new(Duration::from_secs(300));

        cache.put(images(5));
        cache.put(images(2));

        assert_eq!(cache.get().unwrap().len(), 2);
    }

    #[test]
    fn test_get_after_expiry_is_miss() {
        let mut cache = GalleryCache::new(Duration::from_millis(40));

        cache.put(images(1));
        assert!(cache.get().is_some());

        sleep(Duration::from_millis(70));
        assert!(cache.get().is_none());
    }

    #[test]
    fn test_evict_expired_drops_only_expired() {
        let mut cache = GalleryCache::new(Duration::from_millis(40));

        cache.put(images(1));
        assert!(!cache.evict_expired());

        sleep(Duration::from_millis(70));
        assert!(cache.evict_expired());
        assert!(!cache.evict_expired());
        assert_eq!(cache.stats().cached_images, 0);
    }

    #[test]
    fn test_stats_track_hits_and_misses() {
        let mut cache = GalleryCache::new(Duration::from_secs(300));

        let _ = cache.get(); // miss
        cache.put(images(4));
        let _ = cache.get(); // hit

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.refreshes, 1);
        assert_eq!(stats.cached_images, 4);
    }

    #[test]
    fn test_empty_list_is_a_valid_snapshot() {
        let mut cache = GalleryCache::new(Duration::from_secs(300));

        cache.put(Vec::new());
        assert!(cache.is_warm());
        assert_eq!(cache.get().unwrap().len(), 0);
    }
}
