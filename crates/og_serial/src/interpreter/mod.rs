//! Translate between live object graphs and descriptor trees.
//!
//! - [`Parser`]: object graph to descriptor tree, breaking cycles.
//! - [`Builder`]: descriptor tree to object graph, restoring shared instances.
//!
//! Both are session objects: create one per call and drop it afterwards.

// -----------------------------------------------------------------------------
// Modules

mod builder;
mod id_generator;
mod parser;

// -----------------------------------------------------------------------------
// Exports

pub use builder::Builder;
pub use parser::Parser;

/// The reference token of an object: `"{seq}&{type_name}&{identity_hash}"`.
pub(crate) const TOKEN_SEPARATOR: char = '&';
