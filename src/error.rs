//! Error types for the gallery server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Gallery Error Enum ==
/// Unified error type for the gallery server.
///
/// Every variant is terminal for the request that raised it: no retries are
/// performed at any layer, and a failed refresh never touches the cache.
#[derive(Error, Debug)]
pub enum GalleryError {
    /// Required upstream credentials are unset or empty
    #[error("Missing credentials. Set ACCOUNT_ID, API_KEY, and API_SECRET in environment variables.")]
    MissingCredentials,

    /// The listing API answered with a non-2xx status
    #[error("Upstream API error ({status}): {body}")]
    Upstream { status: u16, body: String },

    /// Network failure or malformed response body
    #[error("Failed to fetch gallery images: {0}")]
    Transport(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for GalleryError {
    fn into_response(self) -> Response {
        // All failures surface to the caller as 500 with a diagnostic body.
        let body = Json(json!({
            "error": self.to_string()
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the gallery server.
pub type Result<T> = std::result::Result<T, GalleryError>;
