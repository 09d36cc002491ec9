use serde::{Deserialize, Serialize};

use crate::SerialError;
use crate::descriptor::{DescriptorKind, DescriptorVisitor, MemberMap};

// -----------------------------------------------------------------------------
// Descriptor

/// One node of a descriptor tree.
///
/// Every node records the member name it was read from (`source_name`, empty
/// for the root). All kinds except [`Descriptor::Null`] also record the full
/// type path of the value (`source_type`).
///
/// # Examples
///
/// ```
/// use og_serial::descriptor::{Descriptor, DescriptorKind, ObjectDescriptor};
///
/// let mut person = ObjectDescriptor::new("", "people::Person", "1&Person&42");
/// person.add_field(Descriptor::primitive("age", "i32", "40")).unwrap();
/// person.add_property(Descriptor::primitive("age", "i32", "40")).unwrap();
/// assert!(person.add_field(Descriptor::null("age")).is_err());
///
/// let root = Descriptor::Object(person);
/// assert_eq!(root.kind(), DescriptorKind::Object);
/// assert_eq!(root.source_type(), Some("people::Person"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Descriptor {
    /// The value was absent.
    Null(NullDescriptor),
    /// A scalar or string, copied by value.
    Primitive(PrimitiveDescriptor),
    /// The same instance as an earlier [`Descriptor::Object`].
    CopyRef(CopyRefDescriptor),
    /// A composite instance with identity.
    Object(ObjectDescriptor),
}

impl Descriptor {
    /// Creates a [`Descriptor::Null`].
    #[inline]
    pub fn null(source_name: impl Into<String>) -> Self {
        Self::Null(NullDescriptor {
            source_name: source_name.into(),
        })
    }

    /// Creates a [`Descriptor::Primitive`] holding canonical text.
    #[inline]
    pub fn primitive(
        source_name: impl Into<String>,
        source_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::Primitive(PrimitiveDescriptor {
            source_name: source_name.into(),
            source_type: source_type.into(),
            value: value.into(),
        })
    }

    /// Creates a [`Descriptor::CopyRef`] pointing at the object with id `token`.
    #[inline]
    pub fn copy_ref(
        source_name: impl Into<String>,
        source_type: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self::CopyRef(CopyRefDescriptor {
            source_name: source_name.into(),
            source_type: source_type.into(),
            token: token.into(),
        })
    }

    /// Returns the kind of this node.
    #[inline]
    pub const fn kind(&self) -> DescriptorKind {
        match self {
            Self::Null(_) => DescriptorKind::Null,
            Self::Primitive(_) => DescriptorKind::Primitive,
            Self::CopyRef(_) => DescriptorKind::CopyRef,
            Self::Object(_) => DescriptorKind::Object,
        }
    }

    /// Returns the member name this node was read from.
    #[inline]
    pub fn source_name(&self) -> &str {
        match self {
            Self::Null(d) => &d.source_name,
            Self::Primitive(d) => &d.source_name,
            Self::CopyRef(d) => &d.source_name,
            Self::Object(d) => &d.source_name,
        }
    }

    /// Returns the type path of the value, `None` for null.
    #[inline]
    pub fn source_type(&self) -> Option<&str> {
        match self {
            Self::Null(_) => None,
            Self::Primitive(d) => Some(&d.source_type),
            Self::CopyRef(d) => Some(&d.source_type),
            Self::Object(d) => Some(&d.source_type),
        }
    }

    /// Dispatches to the `visitor` operation of this node's kind.
    pub fn accept<V: DescriptorVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::Null(d) => visitor.visit_null(d),
            Self::Primitive(d) => visitor.visit_primitive(d),
            Self::CopyRef(d) => visitor.visit_copy_ref(d),
            Self::Object(d) => visitor.visit_object(d),
        }
    }
}

// -----------------------------------------------------------------------------
// Leaf nodes

/// See [`Descriptor::Null`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NullDescriptor {
    source_name: String,
}

impl NullDescriptor {
    #[inline]
    pub fn source_name(&self) -> &str {
        &self.source_name
    }
}

/// See [`Descriptor::Primitive`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimitiveDescriptor {
    source_name: String,
    source_type: String,
    value: String,
}

impl PrimitiveDescriptor {
    #[inline]
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    #[inline]
    pub fn source_type(&self) -> &str {
        &self.source_type
    }

    /// The canonical text of the value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// See [`Descriptor::CopyRef`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyRefDescriptor {
    source_name: String,
    source_type: String,
    token: String,
}

impl CopyRefDescriptor {
    #[inline]
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    #[inline]
    pub fn source_type(&self) -> &str {
        &self.source_type
    }

    /// The id of the referenced [`ObjectDescriptor`].
    #[inline]
    pub fn token(&self) -> &str {
        &self.token
    }
}

// -----------------------------------------------------------------------------
// ObjectDescriptor

/// See [`Descriptor::Object`].
///
/// Fields and properties are separate namespaces: a field and a property may
/// share a name, two fields may not.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectDescriptor {
    source_name: String,
    source_type: String,
    id: String,
    fields: MemberMap,
    properties: MemberMap,
}

impl ObjectDescriptor {
    /// Creates an object node without members.
    pub fn new(
        source_name: impl Into<String>,
        source_type: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            source_type: source_type.into(),
            id: id.into(),
            fields: MemberMap::new(),
            properties: MemberMap::new(),
        }
    }

    #[inline]
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    #[inline]
    pub fn source_type(&self) -> &str {
        &self.source_type
    }

    /// The reference token of this instance.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Appends a field.
    ///
    /// Fails with [`SerialError::DuplicateMember`] if a field with the same
    /// name exists.
    pub fn add_field(&mut self, descriptor: Descriptor) -> Result<(), SerialError> {
        self.fields
            .push(descriptor)
            .map_err(|d| SerialError::DuplicateMember {
                kind: "field",
                name: d.source_name().into(),
            })
    }

    /// Appends a property.
    ///
    /// Fails with [`SerialError::DuplicateMember`] if a property with the same
    /// name exists.
    pub fn add_property(&mut self, descriptor: Descriptor) -> Result<(), SerialError> {
        self.properties
            .push(descriptor)
            .map_err(|d| SerialError::DuplicateMember {
                kind: "property",
                name: d.source_name().into(),
            })
    }

    /// The fields, in insertion order.
    #[inline]
    pub fn fields(&self) -> &MemberMap {
        &self.fields
    }

    /// The properties, in insertion order.
    #[inline]
    pub fn properties(&self) -> &MemberMap {
        &self.properties
    }

    /// Returns the field named `name`.
    #[inline]
    pub fn field(&self, name: &str) -> Option<&Descriptor> {
        self.fields.get(name)
    }

    /// Returns the property named `name`.
    #[inline]
    pub fn property(&self, name: &str) -> Option<&Descriptor> {
        self.properties.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::{Descriptor, ObjectDescriptor};
    use crate::SerialError;

    fn sample() -> Descriptor {
        let mut address = ObjectDescriptor::new("address", "people::Address", "2&Address&7");
        address
            .add_field(Descriptor::primitive("city", "alloc::string::String", "Binyamina"))
            .unwrap();

        let mut person = ObjectDescriptor::new("", "people::Person", "1&Person&3");
        person.add_field(Descriptor::Object(address)).unwrap();
        person.add_field(Descriptor::null("spouse")).unwrap();
        person
            .add_property(Descriptor::copy_ref("home", "people::Address", "2&Address&7"))
            .unwrap();
        Descriptor::Object(person)
    }

    #[test]
    fn duplicate_names_per_namespace() {
        let mut object = ObjectDescriptor::new("", "t::T", "1&T&1");
        object.add_field(Descriptor::null("a")).unwrap();
        object.add_property(Descriptor::null("a")).unwrap();

        let err = object.add_property(Descriptor::null("a")).unwrap_err();
        assert!(matches!(
            err,
            SerialError::DuplicateMember { kind: "property", .. }
        ));
        assert_eq!(object.fields().len(), 1);
        assert_eq!(object.properties().len(), 1);
    }

    #[test]
    fn json_round_trip() {
        let tree = sample();
        let json = serde_json::to_string(&tree).unwrap();
        let back: Descriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tree);

        let Descriptor::Object(person) = &back else {
            unreachable!()
        };
        let order: Vec<_> = person.fields().iter().map(Descriptor::source_name).collect();
        assert_eq!(order, ["address", "spouse"]);
    }

    #[test]
    fn json_rejects_duplicates() {
        let json = r#"{
            "kind": "Object",
            "source_name": "",
            "source_type": "t::T",
            "id": "1&T&1",
            "fields": [
                { "kind": "Null", "source_name": "a" },
                { "kind": "Null", "source_name": "a" }
            ],
            "properties": []
        }"#;
        let err = serde_json::from_str::<Descriptor>(json).unwrap_err();
        assert!(err.to_string().contains("duplicate member `a`"));
    }
}
