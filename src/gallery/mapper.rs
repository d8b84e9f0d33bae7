//! Presentation Mapper Module
//!
//! Derives the client-facing fields of an accepted resource: a human-readable
//! alt label and a delivery-optimized URL.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::gallery::last_path_segment;

// == Constants ==
/// Alt text used when the identifier yields nothing readable
pub const ALT_FALLBACK: &str = "Portfolio image";

/// Path marker after which the transformation segment is inserted
pub const UPLOAD_MARKER: &str = "/upload/";

/// Delivery transformation: auto format, auto quality, width cap 1200
pub const TRANSFORM_SEGMENT: &str = "f_auto,q_auto,w_1200";

// == Alt Text ==
/// Derives a human-readable label from an upstream identifier.
///
/// Takes the last path segment, collapses runs of `-`/`_` into single spaces
/// and trims; falls back to [`ALT_FALLBACK`] if nothing readable remains.
pub fn alt_text(public_id: &str) -> String {
    static SEPARATOR_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_]+").unwrap());

    let base = last_path_segment(public_id);
    let label = SEPARATOR_RUNS.replace_all(base, " ");
    let label = label.trim();

    if label.is_empty() {
        ALT_FALLBACK.to_string()
    } else {
        label.to_string()
    }
}

// == Delivery URL ==
/// Rewrites a secure URL to its delivery-optimized form.
///
/// Inserts the transformation segment immediately after the first
/// [`UPLOAD_MARKER`] occurrence. This is a narrow textual contract, not URL
/// parsing: the marker is assumed to appear exactly once in canonical
/// position. A URL missing the marker passes through unchanged with a
/// warning, rather than silently producing a malformed URL.
pub fn delivery_url(secure_url: &str) -> String {
    if !secure_url.contains(UPLOAD_MARKER) {
        warn!(url = secure_url, "upload marker missing, serving URL untransformed");
        return secure_url.to_string();
    }

    secure_url.replacen(
        UPLOAD_MARKER,
        &format!("{}{}/", UPLOAD_MARKER, TRANSFORM_SEGMENT),
        1,
    )
}
