//! Gallery Module
//!
//! The aggregation pipeline: classification of remote resources, presentation
//! mapping, and the orchestrator tying them to cache and upstream client.

pub mod classifier;
pub mod mapper;
mod orchestrator;


// Re-export public types
pub use orchestrator::{curate, GalleryOrchestrator};

// == Shared Helpers ==
/// Returns the last `/`-separated segment of an upstream identifier.
///
/// Identifiers without a separator are returned whole; a trailing separator
/// yields an empty segment.
pub(crate) fn last_path_segment(public_id: &str) -> &str {
    public_id.rsplit('/').next().unwrap_or(public_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_path_segment() {
        assert_eq!(last_path_segment("a/b/c"), "c");
        assert_eq!(last_path_segment("plain"), "plain");
        assert_eq!(last_path_segment("trailing/"), "");
        assert_eq!(last_path_segment(""), "");
    }
}
