//! Provide some tools for parsing token stream.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod reflect_struct;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{FieldAttributes, MemberKind, TypeAttributes};
pub(crate) use reflect_struct::{ReflectStruct, StructField};
