//! Resource Classifier Module
//!
//! Pure decision pipeline determining whether a single remote resource
//! belongs in the public gallery. No network or cache involvement; every
//! predicate takes only primitive inputs so it can be tested in isolation.

use std::sync::LazyLock;

use regex::Regex;

use crate::gallery::last_path_segment;
use crate::models::RemoteResource;

// == Constants ==
/// Formats allowed into the gallery (compared lower-cased)
pub const SUPPORTED_FORMATS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

// == Accepts ==
/// Decides whether a resource belongs in the public gallery.
///
/// A resource is accepted iff all of the following hold:
/// 1. its format is one of [`SUPPORTED_FORMATS`],
/// 2. it is not a platform-provided sample asset,
/// 3. its declared resource type is `image`,
/// 4. it passes the personal-upload heuristic, unless a curation folder is
///    configured, in which case every folder-scoped resource is accepted
///    outright.
pub fn accepts(resource: &RemoteResource, folder_configured: bool) -> bool {
    if !is_supported_format(resource.format.as_deref()) {
        return false;
    }
    if is_sample_asset(&resource.public_id, &resource.secure_url) {
        return false;
    }
    if resource.resource_type.as_deref() != Some("image") {
        return false;
    }
    folder_configured || is_likely_personal_upload(&resource.public_id)
}

// == Format Whitelist ==
/// Checks the format against the whitelist, case-insensitively.
pub fn is_supported_format(format: Option<&str>) -> bool {
    let format = format.unwrap_or("").to_lowercase();
    SUPPORTED_FORMATS.contains(&format.as_str())
}

// == Sample Exclusion ==
/// Detects the hosting platform's demo/placeholder assets.
///
/// These are never user content. All checks are case-insensitive over both
/// the identifier and the delivery URL.
pub fn is_sample_asset(public_id: &str, secure_url: &str) -> bool {
    let id = public_id.to_lowercase();
    let url = secure_url.to_lowercase();

    id.starts_with("samples/") || id == "sample" || id.contains("/sample") || url.contains("/samples/")
}

// == Personal Upload Heuristic ==
/// Pattern-matches camera/phone-originated filenames.
///
/// Separates personal photography uploads from stock/demo assets when no
/// curation folder is configured: the last path segment (upper-cased) must
/// start with a known camera prefix (`IMG`, `PXL`, `MVIMG`, `VID`, `DSC`,
/// `PHOTO`, optionally followed by `-`/`_`, then a digit) or an 8-digit
/// date-like prefix starting with `20`.
pub fn is_likely_personal_upload(public_id: &str) -> bool {
    static CAMERA_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^(?:IMG|PXL|MVIMG|VID|DSC|PHOTO)[-_]?\d|^20\d{6}").unwrap()
    });

    CAMERA_NAME_RE.is_match(&last_path_segment(public_id).to_uppercase())
}
