use core::any::TypeId;
use core::fmt;

use crate::info::{NonGenericTypeInfoCell, ObjectInfo, TypePath, Typed};

// -----------------------------------------------------------------------------
// Type

/// The identity of a type: its [`TypeId`] plus the names from [`TypePath`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Type {
    id: TypeId,
    path: &'static str,
    name: &'static str,
}

impl Type {
    /// Creates the [`Type`] of `T`.
    #[inline]
    pub fn of<T: TypePath>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: T::type_path(),
            name: T::type_name(),
        }
    }

    /// Returns the `TypeId`.
    #[inline]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the full type path, see [`TypePath::type_path`].
    #[inline]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// Returns the short type name, see [`TypePath::type_name`].
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn is<T: 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information, see [`Typed`].
///
/// The set of kinds is closed: a value is either a scalar copied by value, or
/// an object with identity and named members.
#[derive(Debug)]
pub enum TypeInfo {
    /// Scalars and strings.
    Primitive(PrimitiveInfo),
    /// Composite types with fields and properties.
    Object(ObjectInfo),
}

impl TypeInfo {
    /// Returns the [`Type`].
    #[inline]
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Primitive(info) => info.ty(),
            Self::Object(info) => info.ty(),
        }
    }

    /// Returns the `TypeId`.
    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.ty().id()
    }

    /// Returns the full type path.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.ty().path()
    }

    /// Returns the short type name.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.ty().name()
    }

    /// Returns `true` for primitive types.
    #[inline]
    pub const fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    /// Returns the [`ObjectInfo`] if this is an object type.
    #[inline]
    pub const fn as_object(&self) -> Option<&ObjectInfo> {
        match self {
            Self::Object(info) => Some(info),
            Self::Primitive(_) => None,
        }
    }

    /// Returns the [`PrimitiveInfo`] if this is a primitive type.
    #[inline]
    pub const fn as_primitive(&self) -> Option<&PrimitiveInfo> {
        match self {
            Self::Primitive(info) => Some(info),
            Self::Object(_) => None,
        }
    }
}

// -----------------------------------------------------------------------------
// PrimitiveInfo

/// Type info of a scalar or string.
#[derive(Clone, Debug)]
pub struct PrimitiveInfo {
    ty: Type,
}

impl PrimitiveInfo {
    /// Creates the info for primitive `T`.
    #[inline]
    pub fn new<T: TypePath>() -> Self {
        Self { ty: Type::of::<T>() }
    }

    /// Returns the [`Type`].
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }
}

// -----------------------------------------------------------------------------
// Primitive impls

macro_rules! impl_primitive_typed {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Typed for $ty {
                fn type_info() -> &'static TypeInfo {
                    static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                    CELL.get_or_init(|| TypeInfo::Primitive(PrimitiveInfo::new::<Self>()))
                }
            }
        )*
    };
}

impl_primitive_typed!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
);
