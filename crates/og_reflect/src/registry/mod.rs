//! Resolve type paths back to types.
//!
//! ## Menu
//!
//! - [`TypeMeta`]: The [`TypeInfo`] of a type plus a way to create values of it.
//! - [`GetTypeMeta`]: A trait provide a function to create a `TypeMeta` from a type.
//! - [`TypeRegistry`]: A container for storing and looking up `TypeMeta`s.
//!
//! ## auto_register
//!
//! See [`TypeRegistry::register_auto`].
//!
//! We use [`inventory`] crate to implement static registration,
//! not all platforms support it (although major platforms do).
//!
//! [`TypeInfo`]: crate::info::TypeInfo
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod type_meta;
mod type_registry;

// -----------------------------------------------------------------------------
// Exports

pub use type_meta::{Factory, GetTypeMeta, TypeMeta};
pub use type_registry::TypeRegistry;
