//! Value module - In-memory representation of YAML/JSON resource trees.
//!
//! Nodes are the unit the path walker descends through and mutates in place.

mod value;

pub use value::*;
