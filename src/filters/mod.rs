//! Filters module - The set filter and its path walker.

mod set;


pub use set::*;
