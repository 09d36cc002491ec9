//! The descriptor tree: a self-describing, acyclic image of an object graph.
//!
//! ## Menu
//!
//! - [`Descriptor`]: One node, a closed set of four kinds.
//! - [`DescriptorKind`]: The kind of a node and its wire tag.
//! - [`DescriptorVisitor`]: One operation per kind, see [`Descriptor::accept`].
//! - [`MemberMap`]: The ordered, name-unique members of an object node.
//!
//! Descriptors hold no pointer into the live graph, shared instances are
//! expressed through [`CopyRefDescriptor`] tokens instead.

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod member_map;
mod node;
mod visitor;

// -----------------------------------------------------------------------------
// Exports

pub use kind::DescriptorKind;
pub use member_map::MemberMap;
pub use node::{CopyRefDescriptor, Descriptor, NullDescriptor, ObjectDescriptor, PrimitiveDescriptor};
pub use visitor::DescriptorVisitor;
