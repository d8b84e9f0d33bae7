//! Gallery API - A curated photo gallery server
//!
//! Aggregates media resources from an asset-hosting listing service, filters
//! them through a classification pipeline, and caches the curated result for
//! a bounded interval.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod gallery;
pub mod models;
pub mod tasks;
pub mod upstream;

pub use api::AppState;
pub use config::{ConfigSource, GalleryConfig, ServerConfig};
pub use tasks::spawn_cleanup_task;
