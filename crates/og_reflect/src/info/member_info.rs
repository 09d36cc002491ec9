use crate::Member;
use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// FieldInfo

/// Information for a plain data member.
///
/// A field may be marked as the storage behind a property
/// ([`FieldInfo::backing`]); serializers skip such fields so the value is
/// only written once, through the property.
#[derive(Clone, Debug)]
pub struct FieldInfo {
    name: &'static str,
    // `TypeInfo` is created on first access; using a function pointer delays it.
    type_info: fn() -> &'static TypeInfo,
    nullable: bool,
    backs: Option<&'static str>,
}

impl FieldInfo {
    /// Creates a new [`FieldInfo`] for the given field `name` and member type `M`.
    #[inline]
    pub const fn new<M: Member>(name: &'static str) -> Self {
        Self {
            name,
            type_info: M::member_type_info,
            nullable: M::NULLABLE,
            backs: None,
        }
    }

    /// Marks this field as the storage of `property`.
    #[inline]
    pub const fn backing(mut self, property: &'static str) -> Self {
        self.backs = Some(property);
        self
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the [`TypeInfo`] of the value the field holds.
    ///
    /// For `Option<T>` and `Shared<T>` this is the info of `T`.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    /// Returns `true` if the field may hold no value.
    #[inline]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Returns the property this field stores, if any.
    #[inline]
    pub const fn backed_property(&self) -> Option<&'static str> {
        self.backs
    }

    /// Returns `true` if this field is the storage of a property.
    #[inline]
    pub const fn is_backing_field(&self) -> bool {
        self.backs.is_some()
    }
}

// -----------------------------------------------------------------------------
// PropertyInfo

/// Information for a property.
///
/// An *auto* property is a plain get/set over a stored value; a computed
/// property runs custom accessor logic and cannot be replayed safely by a
/// deserializer.
#[derive(Clone, Debug)]
pub struct PropertyInfo {
    name: &'static str,
    // `TypeInfo` is created on first access; using a function pointer delays it.
    type_info: fn() -> &'static TypeInfo,
    nullable: bool,
    writable: bool,
    auto: bool,
}

impl PropertyInfo {
    /// Creates a writable auto property `name` of member type `M`.
    #[inline]
    pub const fn new<M: Member>(name: &'static str) -> Self {
        Self {
            name,
            type_info: M::member_type_info,
            nullable: M::NULLABLE,
            writable: true,
            auto: true,
        }
    }

    /// Marks the property as read-only.
    #[inline]
    pub const fn readonly(mut self) -> Self {
        self.writable = false;
        self
    }

    /// Marks the property as computed (not an auto property).
    #[inline]
    pub const fn computed(mut self) -> Self {
        self.auto = false;
        self
    }

    /// Returns the property name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the [`TypeInfo`] of the value the property holds.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    /// Returns `true` if the property may hold no value.
    #[inline]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Returns `true` if the property has a setter.
    #[inline]
    pub const fn is_writable(&self) -> bool {
        self.writable
    }

    /// Returns `true` for auto properties.
    #[inline]
    pub const fn is_auto(&self) -> bool {
        self.auto
    }
}
