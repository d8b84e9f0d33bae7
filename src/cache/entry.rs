//! Cache Entry Module
//!
//! Defines the single cached gallery snapshot with its expiry timestamp.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::models::GalleryImage;

// == Cache Entry ==
/// One cached gallery result: the curated image list plus its expiry.
///
/// Entries are immutable after creation; a fresh aggregation replaces the
/// whole entry rather than mutating it.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The curated image list, in upstream listing order
    pub images: Vec<GalleryImage>,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds), created_at + TTL
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl` from now.
    pub fn new(images: Vec<GalleryImage>, ttl: Duration) -> Self {
        let now = current_timestamp_ms();
        Self {
            images,
            created_at: now,
            expires_at: now + ttl.as_millis() as u64,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is considered expired when the current
    /// time is greater than or equal to the expiration time.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, 0 once expired.
    pub fn ttl_remaining_ms(&self) -> u64 {
        let now = current_timestamp_ms();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            0
        }
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
