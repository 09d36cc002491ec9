use core::str::FromStr;

use crate::info::{Type, TypeInfo, Typed};
use crate::{ObjectRef, Primitive, Reflect, ReflectError, share};

// -----------------------------------------------------------------------------
// Factory

/// How to create a value of a registered type.
#[derive(Clone, Copy, Debug)]
pub enum Factory {
    /// Parses the canonical text of a primitive.
    Primitive(fn(&str) -> Result<Primitive, ReflectError>),
    /// Creates a default instance of an object.
    Object(fn() -> ObjectRef),
}

fn parse_literal<T>(text: &str) -> Result<Primitive, ReflectError>
where
    T: Typed + FromStr + Into<Primitive>,
{
    text.parse::<T>()
        .map(Into::into)
        .map_err(|_| ReflectError::InvalidLiteral {
            type_path: T::type_path(),
            text: text.into(),
        })
}

fn construct_default<T: Reflect + Typed + Default>() -> ObjectRef {
    ObjectRef::new(share(T::default()))
}

// -----------------------------------------------------------------------------
// TypeMeta

/// Runtime data of one registered type.
///
/// # Examples
///
/// ```
/// use og_reflect::registry::TypeMeta;
/// use og_reflect::Primitive;
///
/// let meta = TypeMeta::of_primitive::<i32>();
/// assert_eq!(meta.ty().path(), "i32");
///
/// let value = meta.parse_primitive("-7").unwrap();
/// assert_eq!(value, Ok(Primitive::I32(-7)));
/// assert!(meta.construct().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct TypeMeta {
    type_info: &'static TypeInfo,
    factory: Factory,
}

impl TypeMeta {
    /// Creates the meta of a primitive type.
    #[inline]
    pub fn of_primitive<T>() -> Self
    where
        T: Typed + FromStr + Into<Primitive>,
    {
        Self {
            type_info: T::type_info(),
            factory: Factory::Primitive(parse_literal::<T>),
        }
    }

    /// Creates the meta of an object type.
    #[inline]
    pub fn of_object<T: Reflect + Typed + Default>() -> Self {
        Self {
            type_info: T::type_info(),
            factory: Factory::Object(construct_default::<T>),
        }
    }

    /// Returns the [`TypeInfo`].
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        self.type_info
    }

    /// Returns the [`Type`].
    #[inline]
    pub fn ty(&self) -> &'static Type {
        self.type_info.ty()
    }

    /// Returns the [`Factory`].
    #[inline]
    pub fn factory(&self) -> Factory {
        self.factory
    }

    /// Parses `text` if this is a primitive type, `None` otherwise.
    #[inline]
    pub fn parse_primitive(&self, text: &str) -> Option<Result<Primitive, ReflectError>> {
        match self.factory {
            Factory::Primitive(parse) => Some(parse(text)),
            Factory::Object(_) => None,
        }
    }

    /// Creates a default instance if this is an object type, `None` otherwise.
    #[inline]
    pub fn construct(&self) -> Option<ObjectRef> {
        match self.factory {
            Factory::Object(construct) => Some(construct()),
            Factory::Primitive(_) => None,
        }
    }
}

// -----------------------------------------------------------------------------
// GetTypeMeta

/// A trait which allows a type to generate its [`TypeMeta`]
/// for registration into the [`TypeRegistry`].
///
/// This trait is automatically implemented for items using
/// [`#[derive(Reflect)]`](crate::derive::Reflect).
///
/// [`TypeRegistry`]: crate::registry::TypeRegistry
pub trait GetTypeMeta: Typed {
    /// Returns the **default** [`TypeMeta`] for this type.
    fn get_type_meta() -> TypeMeta;

    /// Registers other types needed by this type.
    ///
    /// Does not need to register the type itself.
    /// For objects, these are the types held by its members.
    fn register_dependencies(_registry: &mut crate::registry::TypeRegistry) {}
}

macro_rules! impl_primitive_get_type_meta {
    ($($ty:ty),* $(,)?) => {
        $(
            impl GetTypeMeta for $ty {
                #[inline]
                fn get_type_meta() -> TypeMeta {
                    TypeMeta::of_primitive::<Self>()
                }
            }
        )*
    };
}

impl_primitive_get_type_meta!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
);

#[cfg(test)]
mod tests {
    use super::TypeMeta;
    use crate::{Primitive, ReflectError};

    #[test]
    fn parse_primitive_literals() {
        let meta = TypeMeta::of_primitive::<bool>();
        assert_eq!(meta.parse_primitive("true"), Some(Ok(Primitive::Bool(true))));

        let meta = TypeMeta::of_primitive::<u8>();
        assert_eq!(
            meta.parse_primitive("256"),
            Some(Err(ReflectError::InvalidLiteral {
                type_path: "u8",
                text: "256".into(),
            }))
        );

        let meta = TypeMeta::of_primitive::<String>();
        assert_eq!(
            meta.parse_primitive(" spaced "),
            Some(Ok(Primitive::String(" spaced ".into())))
        );
    }

    #[test]
    fn float_text_round_trips() {
        let meta = TypeMeta::of_primitive::<f64>();
        let value = 0.1_f64 + 0.2_f64;
        let text = Primitive::F64(value).to_string();
        assert_eq!(meta.parse_primitive(&text), Some(Ok(Primitive::F64(value))));
    }
}
