use core::any::TypeId;

use og_utils::hash::{HashMap, HashSet};

use crate::info::TypePath;
use crate::registry::{GetTypeMeta, TypeMeta};

// -----------------------------------------------------------------------------
// TypeRegistry

/// A registry of [reflected] types.
///
/// [Registering] a type stores its [`TypeMeta`], indexed by [`TypeId`], full
/// type path and short type name. Short names shared by several types are
/// ambiguous and can only be resolved through the full path.
///
/// A deserializer uses it to turn the type path written in a document back
/// into a constructor.
///
/// # Example
///
/// ```
/// use og_reflect::registry::TypeRegistry;
/// use og_reflect::Primitive;
///
/// let registry = TypeRegistry::new();
///
/// let meta = registry.get_with_type_path("alloc::string::String").unwrap();
/// assert_eq!(meta.ty().name(), "String");
///
/// let meta = registry.get_with_type_name("u64").unwrap();
/// assert_eq!(meta.parse_primitive("9"), Some(Ok(Primitive::U64(9))));
/// ```
///
/// [reflected]: crate
/// [Registering]: TypeRegistry::register
pub struct TypeRegistry {
    type_meta_table: HashMap<TypeId, TypeMeta>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    type_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
}

impl Default for TypeRegistry {
    /// See [`TypeRegistry::new`] .
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Create a empty [`TypeRegistry`].
    #[inline]
    pub fn empty() -> Self {
        Self {
            type_meta_table: HashMap::default(),
            type_path_to_id: HashMap::default(),
            type_name_to_id: HashMap::default(),
            ambiguous_names: HashSet::default(),
        }
    }

    /// Create a type registry with default registrations for primitive types.
    ///
    /// - `bool` `char`
    /// - `i8 - i128` `isize`
    /// - `u8 - u128` `usize`
    /// - `f32` `f64`
    /// - `String`
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register::<bool>();
        registry.register::<char>();
        registry.register::<u8>();
        registry.register::<u16>();
        registry.register::<u32>();
        registry.register::<u64>();
        registry.register::<u128>();
        registry.register::<usize>();
        registry.register::<i8>();
        registry.register::<i16>();
        registry.register::<i32>();
        registry.register::<i64>();
        registry.register::<i128>();
        registry.register::<isize>();
        registry.register::<f32>();
        registry.register::<f64>();
        registry.register::<String>();
        registry
    }

    // # Validity
    // The type must **not** already exist.
    fn add_new_type_indices(&mut self, type_meta: &TypeMeta) {
        let ty = type_meta.ty();
        let type_name = ty.name();

        if !self.ambiguous_names.contains(type_name) {
            if self.type_name_to_id.contains_key(type_name) {
                self.type_name_to_id.remove(type_name);
                self.ambiguous_names.insert(type_name);
            } else {
                self.type_name_to_id.insert(type_name, ty.id());
            }
        }

        // Full paths are assumed to be unique.
        self.type_path_to_id.insert(ty.path(), ty.id());
    }

    /// Insert or **Overwrite** a [`TypeMeta`].
    ///
    /// This method will _not_ register type dependencies.
    /// Use [`register`](Self::register) to register a type with its dependencies.
    pub fn insert_type_meta(&mut self, type_meta: TypeMeta) {
        let type_id = type_meta.ty().id();
        if !self.type_meta_table.contains_key(&type_id) {
            self.add_new_type_indices(&type_meta);
        }
        self.type_meta_table.insert(type_id, type_meta);
    }

    /// Attempts to register the type `T` if it has not yet been registered already.
    ///
    /// This will also recursively register any type dependencies as declared
    /// by [`GetTypeMeta::register_dependencies`]. When deriving `Reflect`,
    /// these are the types held by the members of the struct. Cycles between
    /// types terminate, because a type is inserted before its dependencies.
    ///
    /// # Example
    ///
    /// ```
    /// # use core::any::TypeId;
    /// # use og_reflect::{derive::Reflect, registry::TypeRegistry, Shared};
    /// #[derive(Reflect, Default)]
    /// pub struct Employee {
    ///     pub name: String,
    ///     pub manager: Option<Shared<Employee>>,
    ///     pub desk: Option<Shared<Desk>>,
    /// }
    ///
    /// #[derive(Reflect, Default)]
    /// pub struct Desk {
    ///     pub floor: i16,
    /// }
    ///
    /// let mut registry = TypeRegistry::empty();
    /// registry.register::<Employee>();
    ///
    /// assert!(registry.contains(TypeId::of::<Employee>()));
    /// assert!(registry.contains(TypeId::of::<Desk>()));
    /// assert!(registry.contains(TypeId::of::<i16>()));
    /// ```
    pub fn register<T: GetTypeMeta>(&mut self) {
        let type_id = TypeId::of::<T>();
        if self.type_meta_table.contains_key(&type_id) {
            return;
        }
        let meta = T::get_type_meta();
        self.add_new_type_indices(&meta);
        self.type_meta_table.insert(type_id, meta);
        T::register_dependencies(self);
    }

    /// Automatically registers all types annotated with `#[reflect(auto_register)]`
    /// or declared via `impl_auto_register!`.
    ///
    /// Equivalent to calling [`register`](Self::register) for each of them,
    /// so repeated calls are cheap. Returns the number of submitted types.
    ///
    /// ## Feature Dependency
    ///
    /// Requires the `auto_register` feature. When disabled, it does nothing
    /// and returns `0`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use core::any::TypeId;
    /// # use og_reflect::{derive::Reflect, registry::TypeRegistry};
    /// #[derive(Reflect, Default)]
    /// #[reflect(auto_register)]
    /// pub struct Badge {
    ///     pub code: u32,
    /// }
    ///
    /// let mut registry = TypeRegistry::empty();
    /// registry.register_auto();
    ///
    /// assert!(registry.contains(TypeId::of::<Badge>()));
    /// assert!(registry.contains(TypeId::of::<u32>()));
    /// ```
    pub fn register_auto(&mut self) -> usize {
        #[cfg(feature = "auto_register")]
        {
            crate::__macro_exports::auto_register::__register_types(self)
        }
        #[cfg(not(feature = "auto_register"))]
        {
            0
        }
    }

    /// Registers the referenced type `T` if it has not yet been registered.
    #[inline]
    pub fn register_by_val<T: GetTypeMeta>(&mut self, _: &T) {
        self.register::<T>();
    }

    /// Whether the type with given [`TypeId`] has been registered in this registry.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.type_meta_table.contains_key(&type_id)
    }

    /// Returns a reference to the [`TypeMeta`] of the type with the given [`TypeId`].
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&TypeMeta> {
        self.type_meta_table.get(&type_id)
    }

    /// Returns the [`TypeMeta`] of `T`.
    #[inline]
    pub fn get_of<T: TypePath>(&self) -> Option<&TypeMeta> {
        self.get(TypeId::of::<T>())
    }

    /// Returns a reference to the [`TypeMeta`] of the type with the given
    /// [type path](TypePath::type_path).
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&TypeMeta> {
        self.get(*self.type_path_to_id.get(type_path)?)
    }

    /// Returns a reference to the [`TypeMeta`] of the type with the given
    /// [type name](TypePath::type_name).
    ///
    /// Returns `None` if the name is unknown or ambiguous.
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&TypeMeta> {
        self.get(*self.type_name_to_id.get(type_name)?)
    }

    /// Returns `true` if the short name is shared by several registered types.
    #[inline]
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    /// Returns an iterator over all registered [`TypeMeta`]s, in no particular order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &TypeMeta> {
        self.type_meta_table.values()
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.type_meta_table.len()
    }
}

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use super::TypeRegistry;
    use crate::derive::Reflect;

    mod first {
        #[derive(crate::derive::Reflect, Default)]
        pub struct Tag {
            pub label: String,
        }
    }

    mod second {
        #[derive(crate::derive::Reflect, Default)]
        pub struct Tag {
            pub weight: f32,
        }
    }

    #[derive(Reflect, Default)]
    #[reflect(type_path = "registry_test::Renamed")]
    pub struct Renamed {
        pub tag: Option<crate::Shared<first::Tag>>,
    }

    #[test]
    fn primitives_are_preregistered() {
        let registry = TypeRegistry::new();
        assert_eq!(registry.len(), 17);
        assert!(registry.get_with_type_path("i128").is_some());
        assert!(registry.get_with_type_path("String").is_none());
        assert!(registry.get_with_type_name("String").is_some());
    }

    #[test]
    fn ambiguous_short_names() {
        let mut registry = TypeRegistry::empty();
        registry.register::<first::Tag>();
        registry.register::<second::Tag>();

        assert!(registry.is_ambiguous("Tag"));
        assert!(registry.get_with_type_name("Tag").is_none());

        let path = "og_reflect::registry::type_registry::tests::second::Tag";
        let meta = registry.get_with_type_path(path).unwrap();
        assert_eq!(meta.ty().id(), TypeId::of::<second::Tag>());
    }

    #[test]
    fn explicit_type_path_and_dependencies() {
        let mut registry = TypeRegistry::empty();
        registry.register::<Renamed>();

        let meta = registry.get_with_type_path("registry_test::Renamed").unwrap();
        let object = meta.construct().unwrap();
        assert_eq!(object.type_info().type_name(), "Renamed");

        assert!(registry.get_of::<first::Tag>().is_some());
        assert!(registry.get_of::<String>().is_some());
    }
}
