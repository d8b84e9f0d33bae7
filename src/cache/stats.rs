//! Cache Statistics Module
//!
//! Tracks gallery cache performance metrics: hits, misses, and refreshes.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance metrics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of requests served from the cached snapshot
    pub hits: u64,
    /// Number of requests that found the slot empty or expired
    pub misses: u64,
    /// Number of successful upstream refreshes written to the slot
    pub refreshes: u64,
    /// Number of images in the current snapshot (0 when the slot is empty)
    pub cached_images: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Refresh ==
    /// Increments the refresh counter.
    pub fn record_refresh(&mut self) {
        self.refreshes += 1;
    }

    // == Update Snapshot Size ==
    /// Updates the cached image count.
    pub fn set_cached_images(&mut self, count: usize) {
        self.cached_images = count;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.refreshes, 0);
        assert_eq!(stats.cached_images, 0);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        let stats = CacheStats::new();
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.hit_rate(), 0.5);
    }

    #[test]
    fn test_record_refresh() {
        let mut stats = CacheStats::new();
        stats.record_refresh();
        stats.record_refresh();
        assert_eq!(stats.refreshes, 2);
    }

    #[test]
    fn test_set_cached_images() {
        let mut stats = CacheStats::new();
        stats.set_cached_images(42);
        assert_eq!(stats.cached_images, 42);
    }
}
