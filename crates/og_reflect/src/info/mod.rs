//! Static type information.
//!
//! - [`TypePath`]: stable names for a type.
//! - [`Typed`]: access to a type's [`TypeInfo`] without an instance.
//! - [`TypeInfo`]: either a [`PrimitiveInfo`] or an [`ObjectInfo`].
//! - [`FieldInfo`] / [`PropertyInfo`]: the members of an object type.

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod member_info;
mod object_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use cell::NonGenericTypeInfoCell;
pub use member_info::{FieldInfo, PropertyInfo};
pub use object_info::{ObjectInfo, Visibility};
pub use type_info::{PrimitiveInfo, Type, TypeInfo};
pub use type_path::{DynamicTypePath, TypePath};
pub use typed::{DynamicTyped, Typed};
