//! Field spec module - Declarative mutation rules and the built-in catalog.
//!
//! A field spec names a path, a create-if-missing policy, and the resource
//! kinds it applies to. The catalog merges built-in defaults with caller
//! specs by plain concatenation, defaults first.

mod defaults;
mod spec;

pub use defaults::*;
pub use spec::*;
