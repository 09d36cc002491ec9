use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Automatically implemented by [`#[derive(Reflect)]`](crate::derive::Reflect),
/// allowing access to type information without an instance of the type.
///
/// # Manually Impl
///
/// Use [`NonGenericTypeInfoCell`] to build the info once:
///
/// ```
/// use og_reflect::info::{FieldInfo, NonGenericTypeInfoCell, ObjectInfo};
/// use og_reflect::info::{TypeInfo, TypePath, Typed};
///
/// struct Point { x: i32, y: i32 }
///
/// impl TypePath for Point {
///     fn type_path() -> &'static str { "shapes::Point" }
///     fn type_name() -> &'static str { "Point" }
/// }
///
/// impl Typed for Point {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Object(ObjectInfo::new::<Self>(
///             &[FieldInfo::new::<i32>("x"), FieldInfo::new::<i32>("y")],
///             &[],
///         )))
///     }
/// }
///
/// assert_eq!(Point::type_info().as_object().unwrap().field_len(), 2);
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::info::NonGenericTypeInfoCell
pub trait Typed: TypePath {
    /// A static accessor to compile-time type information.
    ///
    /// Note: Use [`DynamicTyped`] for dynamic dispatch.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Provide dynamic dispatch for types that implement [`Typed`].
///
/// Auto impl for all types that implemented [`Typed`].
pub trait DynamicTyped {
    /// When you hold a `dyn Reflect` object,
    /// use this method to get its type information.
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
