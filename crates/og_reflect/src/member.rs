use crate::info::{TypeInfo, Typed};
use crate::registry::{GetTypeMeta, TypeRegistry};
use crate::{ObjectRef, Primitive, Reflect, ReflectError, Shared, Value};

// -----------------------------------------------------------------------------
// Member

/// A type that can be stored in a reflected field or property.
///
/// Converts between the concrete member type and a type-erased [`Value`].
///
/// Implemented for:
///
/// - `bool` `char` `f32` `f64`
/// - `i8 - i128` `isize`, `u8 - u128` `usize`
/// - `String`
/// - [`Shared<T>`] for reflected objects `T`
/// - `Option<T>` for any of the above, the only way to make a member nullable
///
/// Options do not nest: `Some(None)` and `None` would both become
/// [`Value::Null`].
///
/// ```compile_fail
/// use og_reflect::Member;
///
/// fn member<M: Member>() {}
/// member::<Option<Option<i32>>>();
/// ```
///
/// # Examples
///
/// ```
/// use og_reflect::{Member, Value};
///
/// let v = 42_u16.to_value();
/// assert_eq!(u16::from_value(v.clone()), Ok(42));
/// assert!(i32::from_value(v).is_err());
///
/// assert_eq!(Option::<String>::from_value(Value::Null), Ok(None));
/// assert!(String::from_value(Value::Null).is_err());
/// ```
pub trait Member: Sized + 'static {
    /// Whether the member may hold [`Value::Null`].
    const NULLABLE: bool = false;

    /// Returns the [`TypeInfo`] of the held value.
    ///
    /// Wrappers return the info of the wrapped type.
    fn member_type_info() -> &'static TypeInfo;

    /// Converts the current value.
    fn to_value(&self) -> Value;

    /// Converts a value back into the member type.
    fn from_value(value: Value) -> Result<Self, ReflectError>;

    /// Registers the types this member can hold.
    fn register_type(registry: &mut TypeRegistry);
}

// -----------------------------------------------------------------------------
// NonNullable

mod sealed {
    /// Members that never hold [`Value::Null`](crate::Value::Null) and may
    /// therefore be wrapped in an `Option`.
    pub trait NonNullable {}
}

use sealed::NonNullable;

// -----------------------------------------------------------------------------
// Primitive impls

macro_rules! impl_primitive_member {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl Member for $ty {
                #[inline]
                fn member_type_info() -> &'static TypeInfo {
                    <$ty as Typed>::type_info()
                }

                #[inline]
                fn to_value(&self) -> Value {
                    Value::Primitive(Primitive::$variant(<$ty as Clone>::clone(self)))
                }

                fn from_value(value: Value) -> Result<Self, ReflectError> {
                    match value {
                        Value::Primitive(Primitive::$variant(v)) => Ok(v),
                        Value::Null => Err(ReflectError::UnexpectedNull {
                            expected: <$ty as crate::info::TypePath>::type_path(),
                        }),
                        other => Err(ReflectError::TypeMismatch {
                            expected: <$ty as crate::info::TypePath>::type_path(),
                            found: other.type_path(),
                        }),
                    }
                }

                #[inline]
                fn register_type(registry: &mut TypeRegistry) {
                    registry.register::<$ty>();
                }
            }

            impl NonNullable for $ty {}
        )*
    };
}

impl_primitive_member!(
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
    F32(f32),
    F64(f64),
    String(String),
);

// -----------------------------------------------------------------------------
// Wrapper impls

impl<T: Member + NonNullable> Member for Option<T> {
    const NULLABLE: bool = true;

    #[inline]
    fn member_type_info() -> &'static TypeInfo {
        T::member_type_info()
    }

    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }

    fn from_value(value: Value) -> Result<Self, ReflectError> {
        match value {
            Value::Null => Ok(None),
            value => T::from_value(value).map(Some),
        }
    }

    #[inline]
    fn register_type(registry: &mut TypeRegistry) {
        T::register_type(registry);
    }
}

impl<T: Reflect + GetTypeMeta> NonNullable for Shared<T> {}

impl<T: Reflect + GetTypeMeta> Member for Shared<T> {
    #[inline]
    fn member_type_info() -> &'static TypeInfo {
        T::type_info()
    }

    #[inline]
    fn to_value(&self) -> Value {
        Value::Object(ObjectRef::new(self.clone()))
    }

    fn from_value(value: Value) -> Result<Self, ReflectError> {
        let found = match value {
            Value::Object(object) => match object.downcast::<T>() {
                Some(shared) => return Ok(shared),
                None => object.type_info().type_path(),
            },
            Value::Null => {
                return Err(ReflectError::UnexpectedNull {
                    expected: T::type_path(),
                });
            }
            Value::Primitive(p) => p.type_path(),
        };
        Err(ReflectError::TypeMismatch {
            expected: T::type_path(),
            found,
        })
    }

    #[inline]
    fn register_type(registry: &mut TypeRegistry) {
        registry.register::<T>();
    }
}

#[cfg(test)]
mod tests {
    use crate::{Member, ReflectError, Value, share};

    #[test]
    fn scalar_mismatch() {
        assert_eq!(
            i64::from_value(Value::from(1_i32)),
            Err(ReflectError::TypeMismatch {
                expected: "i64",
                found: "i32"
            })
        );
        assert_eq!(
            bool::from_value(Value::Null),
            Err(ReflectError::UnexpectedNull { expected: "bool" })
        );
    }

    #[test]
    fn option_is_transparent() {
        let v = Some(String::from("Alon")).to_value();
        assert_eq!(v, Value::from("Alon"));
        assert_eq!(
            Option::<String>::from_value(v),
            Ok(Some(String::from("Alon")))
        );
    }

    #[test]
    fn shared_keeps_identity() {
        #[derive(crate::derive::Reflect, Default)]
        pub struct Leaf {
            pub weight: u32,
        }

        let leaf = share(Leaf { weight: 3 });
        let back = <crate::Shared<Leaf>>::from_value(leaf.to_value()).unwrap();
        assert!(alloc::rc::Rc::ptr_eq(&leaf, &back));
        assert!(<crate::Shared<Leaf>>::from_value(Value::from(3_u32)).is_err());
    }
}
