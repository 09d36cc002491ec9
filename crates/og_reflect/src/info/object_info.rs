use og_utils::hash::HashMap;

use crate::info::{FieldInfo, PropertyInfo, Type, TypePath};

// -----------------------------------------------------------------------------
// Visibility

/// Whether a type can be named from outside the crate that defines it.
///
/// Only [`Visibility::Public`] types are serializable: a restricted type may
/// not be constructible by whoever reads the document back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    /// Declared `pub`.
    #[default]
    Public,
    /// Private, `pub(crate)`, `pub(super)` or `pub(in ..)`.
    Restricted,
}

// -----------------------------------------------------------------------------
// ObjectInfo

/// A container for compile-time object info: the type, its visibility, and
/// its fields and properties in declaration order.
///
/// Fields and properties live in separate namespaces, a field and a property
/// may share a name.
///
/// # Examples
///
/// ```
/// use og_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect, Default)]
/// pub struct Account {
///     pub owner: String,
///     #[reflect(property)]
///     pub balance: i64,
/// }
///
/// let info = Account::type_info().as_object().unwrap();
///
/// assert_eq!(info.field_len(), 1);
/// assert_eq!(info.property_len(), 1);
/// assert!(info.property("balance").unwrap().is_auto());
/// assert!(info.is_public());
/// ```
#[derive(Debug)]
pub struct ObjectInfo {
    ty: Type,
    visibility: Visibility,
    fields: Box<[FieldInfo]>,
    properties: Box<[PropertyInfo]>,
    field_indices: HashMap<&'static str, usize>,
    property_indices: HashMap<&'static str, usize>,
}

impl ObjectInfo {
    /// Create a new [`ObjectInfo`] with [`Visibility::Public`].
    ///
    /// The order of members is fixed, depends on the input order.
    pub fn new<T: TypePath>(fields: &[FieldInfo], properties: &[PropertyInfo]) -> Self {
        let field_indices = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name(), index))
            .collect();
        let property_indices = properties
            .iter()
            .enumerate()
            .map(|(index, property)| (property.name(), index))
            .collect();

        Self {
            ty: Type::of::<T>(),
            visibility: Visibility::Public,
            fields: fields.into(),
            properties: properties.into(),
            field_indices,
            property_indices,
        }
    }

    /// Replace the visibility.
    #[inline]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Returns the [`Type`].
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the full type path.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.ty.path()
    }

    /// Returns the [`Visibility`].
    #[inline]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Returns `true` if the type is declared `pub`.
    #[inline]
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    /// Returns the [`FieldInfo`] for the given `name`, if present.
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.get(*self.field_indices.get(name)?)
    }

    /// Returns the [`FieldInfo`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&FieldInfo> {
        self.fields.get(index)
    }

    /// Returns an iterator over the fields in **declaration order**.
    #[inline]
    pub fn fields(&self) -> impl ExactSizeIterator<Item = &FieldInfo> {
        self.fields.iter()
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the [`PropertyInfo`] for the given `name`, if present.
    pub fn property(&self, name: &str) -> Option<&PropertyInfo> {
        self.properties.get(*self.property_indices.get(name)?)
    }

    /// Returns the [`PropertyInfo`] at the given index, if present.
    #[inline]
    pub fn property_at(&self, index: usize) -> Option<&PropertyInfo> {
        self.properties.get(index)
    }

    /// Returns an iterator over the properties in **declaration order**.
    #[inline]
    pub fn properties(&self) -> impl ExactSizeIterator<Item = &PropertyInfo> {
        self.properties.iter()
    }

    /// Returns the number of properties.
    #[inline]
    pub fn property_len(&self) -> usize {
        self.properties.len()
    }
}
