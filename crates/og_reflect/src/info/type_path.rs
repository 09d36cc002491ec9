// -----------------------------------------------------------------------------
// TypePath

/// A static accessor to type paths and names.
///
/// Provide a stable alternative to [`core::any::type_name`] that survives
/// compiler upgrades, so a path written into a document today can be
/// resolved by a [`TypeRegistry`] tomorrow.
///
/// - [`type_path`]: The unique identifier of the type, cannot be duplicated.
/// - [`type_name`]: Type name without module path, may be duplicated.
/// - [`module_path`]: Optional module path.
///
/// We guarantee that these names do not have the prefix `::`.
/// Users should also ensure this when manually implementing it.
///
/// # Implementation
///
/// [`#[derive(Reflect)]`](crate::derive::Reflect) implements it, using
/// `module_path!()` unless a path is given explicitly:
///
/// ```
/// use og_reflect::{derive::Reflect, info::TypePath};
///
/// #[derive(Reflect, Default)]
/// #[reflect(type_path = "my_crate::people::Person")]
/// pub struct Person {
///     pub age: u8,
/// }
///
/// assert_eq!(Person::type_path(), "my_crate::people::Person");
/// assert_eq!(Person::type_name(), "Person");
/// ```
///
/// Manually:
///
/// ```
/// use og_reflect::info::TypePath;
///
/// struct Foo;
///
/// impl TypePath for Foo {
///     fn type_path() -> &'static str { "my_crate::foo::Foo" }
///     fn type_name() -> &'static str { "Foo" }
///     fn module_path() -> Option<&'static str> { Some("my_crate::foo") }
/// }
/// ```
///
/// [`type_path`]: TypePath::type_path
/// [`type_name`]: TypePath::type_name
/// [`module_path`]: TypePath::module_path
/// [`TypeRegistry`]: crate::registry::TypeRegistry
pub trait TypePath: 'static {
    /// Returns the fully qualified path of the target type.
    ///
    /// For `String`, this is `"alloc::string::String"`.
    fn type_path() -> &'static str;

    /// Returns the short name of the type.
    ///
    /// For `String`, this is `"String"`.
    fn type_name() -> &'static str;

    /// Optional module path where the type is defined.
    ///
    /// Primitive built-in types return `None`.
    fn module_path() -> Option<&'static str> {
        None
    }
}

// -----------------------------------------------------------------------------
// DynamicTypePath

/// Provide dynamic dispatch for types that implement [`TypePath`].
///
/// Auto impl for all types that implemented [`TypePath`].
pub trait DynamicTypePath {
    /// See [`TypePath::type_path`].
    fn reflect_type_path(&self) -> &'static str;

    /// See [`TypePath::type_name`].
    fn reflect_type_name(&self) -> &'static str;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        Self::type_path()
    }

    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        Self::type_name()
    }
}

// -----------------------------------------------------------------------------
// Primitive impls

macro_rules! impl_primitive_type_path {
    ($($ty:ty => $path:literal, $name:literal;)*) => {
        $(
            impl TypePath for $ty {
                #[inline]
                fn type_path() -> &'static str {
                    $path
                }

                #[inline]
                fn type_name() -> &'static str {
                    $name
                }
            }
        )*
    };
}

impl_primitive_type_path! {
    bool => "bool", "bool";
    char => "char", "char";
    i8 => "i8", "i8";
    i16 => "i16", "i16";
    i32 => "i32", "i32";
    i64 => "i64", "i64";
    i128 => "i128", "i128";
    isize => "isize", "isize";
    u8 => "u8", "u8";
    u16 => "u16", "u16";
    u32 => "u32", "u32";
    u64 => "u64", "u64";
    u128 => "u128", "u128";
    usize => "usize", "usize";
    f32 => "f32", "f32";
    f64 => "f64", "f64";
}

impl TypePath for String {
    #[inline]
    fn type_path() -> &'static str {
        "alloc::string::String"
    }

    #[inline]
    fn type_name() -> &'static str {
        "String"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::string")
    }
}
