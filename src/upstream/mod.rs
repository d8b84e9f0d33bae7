//! Upstream Module
//!
//! Client for the third-party asset-hosting listing API.

mod client;

pub use client::ListingClient;

// == Public Constants ==
/// Production listing API origin
pub const DEFAULT_BASE_URL: &str = "https://api.cloudinary.com";

/// Fixed listing page size; assumed sufficient to reach the image cap
pub const PAGE_SIZE: u32 = 120;
