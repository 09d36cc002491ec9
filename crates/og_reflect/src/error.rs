use thiserror::Error;

use crate::info::TypePath;

/// An error raised while reading or assigning a member through reflection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ReflectError {
    /// The type has no field or property with the given name.
    #[error("`{type_path}` has no member named `{member}`")]
    MissingMember {
        type_path: &'static str,
        member: String,
    },
    /// The property has no setter.
    #[error("property `{member}` of `{type_path}` is read-only")]
    ReadOnly {
        type_path: &'static str,
        member: String,
    },
    /// The value cannot be stored in a member of the expected type.
    #[error("expected a value of type `{expected}`, found `{found}`")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// A null value was assigned to a member that cannot be absent.
    #[error("`{expected}` cannot hold a null value")]
    UnexpectedNull { expected: &'static str },
    /// The text is not the canonical form of a primitive.
    #[error("`{text}` is not a valid `{type_path}` literal")]
    InvalidLiteral {
        type_path: &'static str,
        text: String,
    },
}

impl ReflectError {
    /// Creates a [`ReflectError::MissingMember`] for type `T`.
    #[inline]
    pub fn missing_member<T: TypePath>(member: &str) -> Self {
        Self::MissingMember {
            type_path: T::type_path(),
            member: member.into(),
        }
    }

    /// Creates a [`ReflectError::ReadOnly`] for type `T`.
    #[inline]
    pub fn read_only<T: TypePath>(member: &str) -> Self {
        Self::ReadOnly {
            type_path: T::type_path(),
            member: member.into(),
        }
    }
}
