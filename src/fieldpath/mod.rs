//! Field path module - Parsed form of field spec path strings.
//!
//! Paths are `/`-separated; the reserved `*` token fans out over sequences.

mod path;

pub use path::*;
