use std::io::{Read, Write};

use og_reflect::info::Typed;
use og_reflect::registry::TypeRegistry;
use og_reflect::{Reflect, Shared, Value};

use crate::SerialError;
use crate::descriptor::Descriptor;
use crate::interpreter::{Builder, Parser};
use crate::wire::{WireOptions, read_document, write_document};

// -----------------------------------------------------------------------------
// ObjectSerializer

/// Writes object graphs to XML and reads them back, preserving shared and
/// cyclic references.
///
/// Holds only configuration: every call runs its own [`Parser`] or
/// [`Builder`] session, so one serializer can serve any number of calls.
///
/// # Examples
///
/// ```
/// use og_reflect::{derive::Reflect, registry::TypeRegistry, share, Shared};
/// use og_serial::ObjectSerializer;
///
/// #[derive(Reflect, Default)]
/// pub struct Person {
///     pub name: String,
///     pub spouse: Option<Shared<Person>>,
/// }
///
/// let alon = share(Person { name: "Alon".into(), spouse: None });
/// let liat = share(Person { name: "Liat".into(), spouse: Some(alon.clone()) });
/// alon.borrow_mut().spouse = Some(liat.clone());
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Person>();
/// let serializer = ObjectSerializer::new(registry);
///
/// let mut buffer = Vec::new();
/// serializer.serialize_object(&liat, &mut buffer).unwrap();
/// let new_liat: Shared<Person> = serializer.deserialize_object(buffer.as_slice()).unwrap();
///
/// let new_alon = new_liat.borrow().spouse.clone().unwrap();
/// let back = new_alon.borrow().spouse.clone().unwrap();
/// assert!(std::rc::Rc::ptr_eq(&back, &new_liat));
/// # alon.borrow_mut().spouse = None;
/// # new_alon.borrow_mut().spouse = None;
/// ```
pub struct ObjectSerializer {
    registry: TypeRegistry,
    filter: Option<Box<dyn Fn(&str) -> bool>>,
    options: WireOptions,
}

impl ObjectSerializer {
    /// Creates a serializer resolving types through `registry`.
    pub fn new(registry: TypeRegistry) -> Self {
        Self {
            registry,
            filter: None,
            options: WireOptions::default(),
        }
    }

    /// Skips every field or property whose name satisfies `filter`.
    pub fn with_member_filter(mut self, filter: impl Fn(&str) -> bool + 'static) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Replaces the document layout options.
    pub fn with_options(mut self, options: WireOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the registry used to resolve types.
    #[inline]
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Returns a mutable reference to the registry, to register more types.
    #[inline]
    pub fn registry_mut(&mut self) -> &mut TypeRegistry {
        &mut self.registry
    }

    // -------------------------------------------------------------------------
    // Interpreter

    /// Describes the graph reachable from `value`.
    pub fn interpret(&self, value: &Value) -> Result<Descriptor, SerialError> {
        let mut parser = match &self.filter {
            Some(filter) => Parser::with_filter(&**filter),
            None => Parser::new(),
        };
        let descriptor = parser.parse(value, "")?;
        log::debug!("described {} objects", parser.object_count());
        Ok(descriptor)
    }

    /// Builds the graph described by `descriptor`.
    pub fn analyze(&self, descriptor: &Descriptor) -> Result<Value, SerialError> {
        let mut builder = Builder::new(&self.registry);
        let value = builder.build(descriptor)?;
        log::debug!("built {} objects", builder.object_count());
        Ok(value)
    }

    // -------------------------------------------------------------------------
    // Text

    /// Renders the graph reachable from `value` as an XML string.
    ///
    /// Fails with [`SerialError::InvalidArgument`] if `value` is null.
    pub fn to_xml_string(&self, value: &Value) -> Result<String, SerialError> {
        if value.is_null() {
            return Err(SerialError::InvalidArgument("cannot serialize a null root"));
        }
        let descriptor = self.interpret(value)?;
        Ok(write_document(&descriptor, self.options))
    }

    /// Reads a graph from an XML string.
    pub fn from_xml_str(&self, text: &str) -> Result<Value, SerialError> {
        let descriptor = read_document(text)?;
        self.analyze(&descriptor)
    }

    // -------------------------------------------------------------------------
    // Streams

    /// Writes the graph reachable from `value` to `writer`.
    ///
    /// Fails with [`SerialError::InvalidArgument`] if `value` is null.
    pub fn serialize<W: Write>(&self, value: &Value, mut writer: W) -> Result<(), SerialError> {
        let text = self.to_xml_string(value)?;
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Writes the graph reachable from `object` to `writer`.
    pub fn serialize_object<T, W>(&self, object: &Shared<T>, writer: W) -> Result<(), SerialError>
    where
        T: Reflect + Typed,
        W: Write,
    {
        self.serialize(&Value::from(object.clone()), writer)
    }

    /// Reads a graph from `reader`, which must hold UTF-8 text.
    pub fn deserialize<R: Read>(&self, mut reader: R) -> Result<Value, SerialError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = String::from_utf8(bytes)
            .map_err(|err| SerialError::malformed(format!("document is not UTF-8: {err}")))?;
        self.from_xml_str(&text)
    }

    /// Reads a graph whose root must be a `T`.
    ///
    /// Fails with [`SerialError::TypeResolution`] if the root is of another type.
    pub fn deserialize_object<T: Reflect + Typed, R: Read>(
        &self,
        reader: R,
    ) -> Result<Shared<T>, SerialError> {
        let value = self.deserialize(reader)?;
        value
            .as_object()
            .and_then(|object| object.downcast::<T>())
            .ok_or_else(|| SerialError::TypeResolution {
                type_path: value.type_path().into(),
                reason: "root is not of the requested type",
            })
    }
}

#[cfg(test)]
mod tests {
    use og_reflect::Value;
    use og_reflect::registry::TypeRegistry;

    use super::ObjectSerializer;
    use crate::SerialError;
    use crate::wire::WireOptions;

    #[test]
    fn null_root_is_rejected() {
        let serializer = ObjectSerializer::new(TypeRegistry::new());
        let mut sink = Vec::new();
        assert!(matches!(
            serializer.serialize(&Value::Null, &mut sink),
            Err(SerialError::InvalidArgument(_))
        ));
        assert!(sink.is_empty());
    }

    #[test]
    fn primitive_root() {
        let serializer = ObjectSerializer::new(TypeRegistry::new()).with_options(WireOptions::COMPACT);
        let xml = serializer.to_xml_string(&Value::from(-8_i64)).unwrap();
        assert_eq!(
            xml,
            r#"<serializeInfo><Primitive name="" type="i64">-8</Primitive></serializeInfo>"#
        );
        assert_eq!(serializer.from_xml_str(&xml).unwrap(), Value::from(-8_i64));
    }

    #[test]
    fn non_utf8_input() {
        let serializer = ObjectSerializer::new(TypeRegistry::new());
        let bytes: &[u8] = &[0x3c, 0xff, 0xfe];
        assert!(matches!(
            serializer.deserialize(bytes),
            Err(SerialError::MalformedDocument(_))
        ));
    }
}
