//! Cache Module
//!
//! Single-slot in-memory cache for the curated gallery with TTL expiry.

mod entry;
mod stats;
mod store;

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::GalleryCache;

// == Public Constants ==
/// Fixed lifetime of a cached gallery snapshot
pub const CACHE_TTL: std::time::Duration = std::time::Duration::from_secs(5 * 60);
