//! API Module
//!
//! HTTP handlers and routing for the gallery server REST API.
//!
//! # Endpoints
//! - `GET /api/gallery-images` - The curated gallery
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
