//! Data models for the gallery server
//!
//! This module defines the DTOs (Data Transfer Objects) used for the upstream
//! listing API and for serializing HTTP response bodies.

pub mod responses;
pub mod upstream;

// Re-export commonly used types
pub use responses::{ErrorResponse, GalleryImage, GalleryResponse, HealthResponse, StatsResponse};
pub use upstream::{ListingResponse, RemoteResource};
