//! Error taxonomy for path parsing and traversal.

use thiserror::Error;

/// Error represents a failure while resolving or applying field specs.
///
/// Missing keys under `create: false` and targets matching zero resources are
/// deliberately not represented here: both are valid no-op outcomes.
#[derive(Debug, Error)]
pub enum Error {
    /// The path string names no location at all.
    #[error("invalid path spec {path:?}: a path must contain at least one segment")]
    InvalidPathSpec { path: String },

    /// Traversal reached a node whose kind cannot satisfy the next segment.
    #[error("{resource}: cannot descend into {found} at segment {segment_index} of path {path:?}: expected {expected}")]
    PathTypeMismatch {
        resource: String,
        path: String,
        segment_index: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Every error gathered during a collect-all apply.
    #[error("{} errors applying field specs: {}", .0.len(), format_multiple(.0))]
    Multiple(Vec<Error>),
}

impl Error {
    /// Creates an invalid path spec error.
    pub fn invalid_path_spec(path: impl Into<String>) -> Self {
        Error::InvalidPathSpec { path: path.into() }
    }

    /// Creates a path type mismatch error.
    pub fn path_type_mismatch(
        resource: impl Into<String>,
        path: impl Into<String>,
        segment_index: usize,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Error::PathTypeMismatch {
            resource: resource.into(),
            path: path.into(),
            segment_index,
            expected,
            found,
        }
    }
}

fn format_multiple(errors: &[Error]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_path_spec("");
        assert!(err.to_string().contains("invalid path spec"));

        let err = Error::path_type_mismatch(
            "Deployment/dep",
            "spec/replicas/extra",
            2,
            "mapping",
            "int",
        );
        let msg = err.to_string();
        assert!(msg.contains("Deployment/dep"));
        assert!(msg.contains("segment 2"));
        assert!(msg.contains("expected mapping"));
    }

    #[test]
    fn test_multiple_display_counts() {
        let err = Error::Multiple(vec![
            Error::invalid_path_spec(""),
            Error::invalid_path_spec("//"),
        ]);
        assert!(err.to_string().starts_with("2 errors"));
    }
}
