use og_reflect::registry::{TypeMeta, TypeRegistry};
use og_reflect::{ObjectRef, Value};
use og_utils::hash::HashMap;

use crate::SerialError;
use crate::descriptor::{
    CopyRefDescriptor, Descriptor, DescriptorVisitor, NullDescriptor, ObjectDescriptor,
    PrimitiveDescriptor,
};

// -----------------------------------------------------------------------------
// Builder

/// Turns a descriptor tree back into an object graph.
///
/// Types are resolved by path through the [`TypeRegistry`]. Every object is
/// registered under its id *before* its members are built, so a
/// [`Descriptor::CopyRef`] inside its own subtree resolves to it.
///
/// # Examples
///
/// ```
/// use og_reflect::{derive::Reflect, registry::TypeRegistry};
/// use og_serial::descriptor::{Descriptor, ObjectDescriptor};
/// use og_serial::interpreter::Builder;
///
/// #[derive(Reflect, Default)]
/// #[reflect(type_path = "demo::Counter")]
/// pub struct Counter {
///     pub hits: u32,
/// }
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Counter>();
///
/// let mut tree = ObjectDescriptor::new("", "demo::Counter", "1&Counter&0");
/// tree.add_field(Descriptor::primitive("hits", "u32", "12")).unwrap();
///
/// let value = Builder::new(&registry).build(&Descriptor::Object(tree)).unwrap();
/// let counter = value.as_object().unwrap().downcast::<Counter>().unwrap();
/// assert_eq!(counter.borrow().hits, 12);
/// ```
pub struct Builder<'r> {
    registry: &'r TypeRegistry,
    tracker: HashMap<String, ObjectRef>,
}

impl<'r> Builder<'r> {
    /// Creates a session resolving types through `registry`.
    #[inline]
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self {
            registry,
            tracker: HashMap::default(),
        }
    }

    /// The number of objects built so far.
    #[inline]
    pub fn object_count(&self) -> usize {
        self.tracker.len()
    }

    /// Builds the value described by `descriptor`.
    #[inline]
    pub fn build(&mut self, descriptor: &Descriptor) -> Result<Value, SerialError> {
        descriptor.accept(self)
    }

    fn resolve(&self, type_path: &str) -> Result<&'r TypeMeta, SerialError> {
        self.registry
            .get_with_type_path(type_path)
            .ok_or_else(|| SerialError::TypeResolution {
                type_path: type_path.into(),
                reason: "type is not registered",
            })
    }
}

impl DescriptorVisitor for Builder<'_> {
    type Output = Result<Value, SerialError>;

    fn visit_null(&mut self, _: &NullDescriptor) -> Self::Output {
        Ok(Value::Null)
    }

    fn visit_primitive(&mut self, descriptor: &PrimitiveDescriptor) -> Self::Output {
        let meta = self.resolve(descriptor.source_type())?;
        let parsed = meta.parse_primitive(descriptor.value()).ok_or_else(|| {
            SerialError::TypeResolution {
                type_path: descriptor.source_type().into(),
                reason: "expected a primitive type",
            }
        })?;

        parsed
            .map(Value::Primitive)
            .map_err(|source| SerialError::Conversion {
                member: descriptor.source_name().into(),
                source,
            })
    }

    fn visit_copy_ref(&mut self, descriptor: &CopyRefDescriptor) -> Self::Output {
        match self.tracker.get(descriptor.token()) {
            Some(object) => {
                log::debug!(
                    "member `{}` refers back to `{}`",
                    descriptor.source_name(),
                    descriptor.token()
                );
                Ok(Value::Object(object.clone()))
            }
            None => Err(SerialError::DanglingReference {
                token: descriptor.token().into(),
            }),
        }
    }

    fn visit_object(&mut self, descriptor: &ObjectDescriptor) -> Self::Output {
        let meta = self.resolve(descriptor.source_type())?;
        let not_object = || SerialError::TypeResolution {
            type_path: descriptor.source_type().into(),
            reason: "expected an object type",
        };
        let object = meta.construct().ok_or_else(not_object)?;
        let info = object.type_info().as_object().ok_or_else(not_object)?;

        if self.tracker.contains_key(descriptor.id()) {
            return Err(SerialError::malformed(format!(
                "object id `{}` appears twice",
                descriptor.id()
            )));
        }
        self.tracker.insert(descriptor.id().into(), object.clone());
        log::trace!("building `{}` as `{}`", descriptor.source_type(), descriptor.id());

        for field in descriptor.fields() {
            let name = field.source_name();
            if info.field(name).is_none() {
                return Err(missing_member(descriptor, "field", name));
            }
            let value = self.build(field)?;
            object
                .borrow_mut()
                .set_field(name, value)
                .map_err(|err| SerialError::from_reflect("field", name, err))?;
        }

        for property in descriptor.properties() {
            let name = property.source_name();
            if info.property(name).is_none() {
                return Err(missing_member(descriptor, "property", name));
            }
            let value = self.build(property)?;
            object
                .borrow_mut()
                .set_property(name, value)
                .map_err(|err| SerialError::from_reflect("property", name, err))?;
        }

        Ok(Value::Object(object))
    }
}

fn missing_member(descriptor: &ObjectDescriptor, kind: &'static str, member: &str) -> SerialError {
    SerialError::MissingMember {
        type_path: descriptor.source_type().into(),
        kind,
        member: member.into(),
    }
}
