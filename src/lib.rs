//! # Fieldspec Filter
//!
//! A Rust implementation of field-path-driven mutation of Kubernetes-style
//! configuration resources.
//!
//! Given parsed YAML/JSON resource trees and an ordered list of field specs,
//! the set filter locates the field each path names and assigns a scalar
//! value there, creating intermediate mappings and the leaf itself when the
//! spec permits and leaving the document untouched when it does not. A
//! built-in catalog of per-kind default specs is merged ahead of
//! caller-supplied ones; the same path may appear more than once and every
//! occurrence is honored in order.
//!
//! ## Modules
//!
//! - [`value`] - In-memory representation of YAML/JSON resource trees
//! - [`fieldpath`] - Parsed field path segments, including the `*` wildcard
//! - [`fieldspec`] - Field specs, kind selectors, and the default catalog
//! - [`resource`] - Document wrapper and target identity selection
//! - [`filters`] - The set filter that walks paths and mutates in place

pub mod error;
pub mod fieldpath;
pub mod fieldspec;
pub mod filters;
pub mod resource;
pub mod value;

pub use error::{Error, Result};
pub use fieldpath::{FieldPath, PathSegment};
pub use fieldspec::{DefaultCatalog, FieldSpec, FsSlice, Gvk};
pub use filters::{ErrorPolicy, SetFilter};
pub use resource::{ResId, Resource};
pub use value::{Mapping, Node};
