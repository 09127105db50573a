//! Path segment and field path types.

use crate::error::{Error, Result};

/// Separator between path segments in a field spec path string.
pub const PATH_SEPARATOR: char = '/';

/// Reserved token matching every element of the enclosing sequence.
pub const WILDCARD: &str = "*";

/// PathSegment represents one step of a field path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Literal key into a mapping node.
    Field(String),
    /// Fan-out over every element of a sequence node.
    EveryItem,
}

impl PathSegment {
    /// Creates a new literal field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Returns true if this segment is the sequence wildcard.
    pub fn is_wildcard(&self) -> bool {
        matches!(self, PathSegment::EveryItem)
    }

    /// Returns the field name if this is a literal segment.
    pub fn as_field(&self) -> Option<&str> {
        match self {
            PathSegment::Field(name) => Some(name),
            _ => None,
        }
    }
}

/// FieldPath is the parsed, non-empty form of a field spec path string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Splits a path string on `/` into an ordered list of segments.
    ///
    /// Empty segments from doubled, leading, or trailing separators are
    /// skipped, so `spec/replicas`, `/spec/replicas`, and `spec//replicas`
    /// all parse to the same path. A string with no non-separator characters
    /// has no location to name and is rejected.
    pub fn parse(path: &str) -> Result<Self> {
        let segments: Vec<PathSegment> = path
            .split(PATH_SEPARATOR)
            .filter(|s| !s.is_empty())
            .map(|s| {
                if s == WILDCARD {
                    PathSegment::EveryItem
                } else {
                    PathSegment::field(s)
                }
            })
            .collect();

        if segments.is_empty() {
            return Err(Error::invalid_path_spec(path));
        }
        Ok(FieldPath { segments })
    }

    /// Creates a path from a vector of segments. A path must name at least
    /// one location; the walker relies on this invariant.
    pub fn from_segments(segments: Vec<PathSegment>) -> Self {
        debug_assert!(!segments.is_empty(), "a field path must have at least one segment");
        FieldPath { segments }
    }

    /// Returns the number of segments in the path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn iter(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns a slice of the path segments.
    pub fn as_slice(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, "{}", name),
            PathSegment::EveryItem => write!(f, "{}", WILDCARD),
        }
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", PATH_SEPARATOR)?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
