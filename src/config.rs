//! Configuration Module
//!
//! Handles server tunables and per-request gallery credentials, both loaded
//! from environment variables.

use std::env;

use crate::error::{GalleryError, Result};

// == Bounds ==
/// Default image cap when MAX_IMAGES is unset or unparseable
pub const DEFAULT_MAX_IMAGES: usize = 30;

/// Lowest accepted image cap
pub const MIN_MAX_IMAGES: usize = 12;

/// Highest accepted image cap
pub const MAX_MAX_IMAGES: usize = 80;

// == Server Config ==
/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP server port
    pub server_port: u16,
    /// Background cache cleanup interval in seconds
    pub cleanup_interval: u64,
}

impl ServerConfig {
    /// Creates a new ServerConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Cache cleanup frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cleanup_interval: 60,
        }
    }
}

// == Gallery Config ==
/// Credentials and tunables for one gallery refresh.
///
/// Built fresh per request from environment state and never cached, so
/// credential rotation takes effect without a restart.
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    /// Upstream account identifier (path segment of the listing URL)
    pub account_id: String,
    /// API key, sent as the Basic auth username
    pub api_key: String,
    /// API secret, sent as the Basic auth password
    pub api_secret: String,
    /// Optional folder restriction, normalized to end with `/`
    pub folder_prefix: Option<String>,
    /// Maximum number of images to serve, clamped to [12, 80]
    pub max_images: usize,
}

impl GalleryConfig {
    /// Creates a new GalleryConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `ACCOUNT_ID` - Upstream account identifier (required)
    /// - `API_KEY` - API key (required)
    /// - `API_SECRET` - API secret (required)
    /// - `PORTFOLIO_FOLDER` - Optional folder prefix filter
    /// - `MAX_IMAGES` - Optional image cap override (default: 30, clamped to [12, 80])
    ///
    /// # Errors
    /// Returns `GalleryError::MissingCredentials` if any required variable is
    /// unset or empty.
    pub fn from_env() -> Result<Self> {
        let account_id = require_env("ACCOUNT_ID")?;
        let api_key = require_env("API_KEY")?;
        let api_secret = require_env("API_SECRET")?;

        let folder_prefix = env::var("PORTFOLIO_FOLDER")
            .ok()
            .and_then(|v| normalize_folder(&v));

        let max_images = clamp_max_images(env::var("MAX_IMAGES").ok().as_deref());

        Ok(Self {
            account_id,
            api_key,
            api_secret,
            folder_prefix,
            max_images,
        })
    }
}

// == Config Source ==
/// Where the orchestrator gets its per-request GalleryConfig from.
///
/// `Env` re-reads the environment on every refresh; `Fixed` pins a config,
/// which keeps tests deterministic without touching process-global state.
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// Resolve from environment variables on every call
    Env,
    /// Always return the given config
    Fixed(GalleryConfig),
}

impl ConfigSource {
    /// Resolves a GalleryConfig from this source.
    pub fn resolve(&self) -> Result<GalleryConfig> {
        match self {
            ConfigSource::Env => GalleryConfig::from_env(),
            ConfigSource::Fixed(config) => Ok(config.clone()),
        }
    }
}

// == Helpers ==
/// Reads a required environment variable, treating empty values as absent.
fn require_env(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(GalleryError::MissingCredentials),
    }
}

/// Normalizes a configured folder into a prefix filter.
///
/// Trims whitespace and guarantees a trailing `/`; a blank value means no
/// folder restriction at all.
fn normalize_folder(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.ends_with('/') {
        Some(trimmed.to_string())
    } else {
        Some(format!("{}/", trimmed))
    }
}

/// Parses and clamps the MAX_IMAGES override.
///
/// Unset or unparseable values fall back to the default of 30; parsed values
/// are clamped to the inclusive range [12, 80].
fn clamp_max_images(raw: Option<&str>) -> usize {
    match raw.and_then(|v| v.trim().parse::<i64>().ok()) {
        Some(n) => n.clamp(MIN_MAX_IMAGES as i64, MAX_MAX_IMAGES as i64) as usize,
        None => DEFAULT_MAX_IMAGES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env vars are process-global; serialize the tests that touch them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn set_credentials() {
        env::set_var("ACCOUNT_ID", "demo-account");
        env::set_var("API_KEY", "key");
        env::set_var("API_SECRET", "secret");
    }

    fn clear_gallery_env() {
        env::remove_var("ACCOUNT_ID");
        env::remove_var("API_KEY");
        env::remove_var("API_SECRET");
        env::remove_var("PORTFOLIO_FOLDER");
        env::remove_var("MAX_IMAGES");
    }

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cleanup_interval, 60);
    }

    #[test]
    fn test_missing_credentials() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_gallery_env();

        let result = GalleryConfig::from_env();
        assert!(matches!(result, Err(GalleryError::MissingCredentials)));
    }

    #[test]
    fn test_empty_credential_counts_as_missing() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_gallery_env();
        set_credentials();
        env::set_var("API_SECRET", "  ");

        let result = GalleryConfig::from_env();
        assert!(matches!(result, Err(GalleryError::MissingCredentials)));

        clear_gallery_env();
    }

    #[test]
    fn test_from_env_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_gallery_env();
        set_credentials();

        let config = GalleryConfig::from_env().unwrap();
        assert_eq!(config.account_id, "demo-account");
        assert_eq!(config.folder_prefix, None);
        assert_eq!(config.max_images, DEFAULT_MAX_IMAGES);

        clear_gallery_env();
    }

    #[test]
    fn test_folder_prefix_gets_trailing_slash() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_gallery_env();
        set_credentials();
        env::set_var("PORTFOLIO_FOLDER", " portfolio ");

        let config = GalleryConfig::from_env().unwrap();
        assert_eq!(config.folder_prefix.as_deref(), Some("portfolio/"));

        clear_gallery_env();
    }

    #[test]
    fn test_folder_prefix_existing_slash_kept() {
        assert_eq!(normalize_folder("portfolio/").as_deref(), Some("portfolio/"));
    }

    #[test]
    fn test_blank_folder_means_no_filter() {
        assert_eq!(normalize_folder("   "), None);
    }

    #[test]
    fn test_max_images_clamped_low() {
        assert_eq!(clamp_max_images(Some("5")), MIN_MAX_IMAGES);
    }

    #[test]
    fn test_max_images_clamped_high() {
        assert_eq!(clamp_max_images(Some("500")), MAX_MAX_IMAGES);
    }

    #[test]
    fn test_max_images_non_numeric_falls_back() {
        assert_eq!(clamp_max_images(Some("lots")), DEFAULT_MAX_IMAGES);
    }

    #[test]
    fn test_max_images_unset_falls_back() {
        assert_eq!(clamp_max_images(None), DEFAULT_MAX_IMAGES);
    }

    #[test]
    fn test_max_images_in_range_kept() {
        assert_eq!(clamp_max_images(Some("42")), 42);
    }

    #[test]
    fn test_fixed_source_resolves_without_env() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_gallery_env();

        let pinned = GalleryConfig {
            account_id: "acct".to_string(),
            api_key: "k".to_string(),
            api_secret: "s".to_string(),
            folder_prefix: None,
            max_images: 20,
        };
        let resolved = ConfigSource::Fixed(pinned).resolve().unwrap();
        assert_eq!(resolved.account_id, "acct");
        assert_eq!(resolved.max_images, 20);
    }
}
