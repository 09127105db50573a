//! Resource module - Parsed documents and target identity selection.

mod resource;

pub use resource::*;
