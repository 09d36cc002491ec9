//! Round trips of a small cyclic graph of people.

use std::rc::Rc;

use og_reflect::derive::Reflect;
use og_reflect::info::{FieldInfo, NonGenericTypeInfoCell, ObjectInfo, PropertyInfo};
use og_reflect::info::{TypeInfo, TypePath, Typed};
use og_reflect::registry::{GetTypeMeta, TypeMeta, TypeRegistry};
use og_reflect::{Member, Reflect, ReflectError, Shared, Value, share};
use og_serial::descriptor::{Descriptor, DescriptorKind};
use og_serial::{ObjectSerializer, SerialError, WireOptions};

// -----------------------------------------------------------------------------
// Model

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(type_path = "people::FullName")]
pub struct FullName {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(type_path = "people::Address")]
pub struct Address {
    #[reflect(property)]
    pub street: Option<String>,
    #[reflect(property)]
    pub city: Option<String>,
    #[reflect(property)]
    pub zip_code: Option<String>,
    #[reflect(property)]
    pub phone_number: Option<String>,
}

#[derive(Reflect, Default)]
#[reflect(type_path = "people::Person")]
pub struct Person {
    #[reflect(property)]
    pub name: Option<Shared<FullName>>,
    #[reflect(property)]
    pub age: i32,
    #[reflect(property)]
    pub address: Option<Shared<Address>>,
    #[reflect(property)]
    pub spouse: Option<Shared<Person>>,
}

fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry.register::<Person>();
    registry
}

fn name(first: &str, last: &str) -> Option<Shared<FullName>> {
    Some(share(FullName {
        first_name: first.into(),
        last_name: last.into(),
    }))
}

/// Liat and Alon are each other's spouse and share one address.
fn liat_and_alon() -> (Shared<Person>, Shared<Person>) {
    let address = share(Address {
        street: Some("Azmaut 10".into()),
        city: Some("Binyamina".into()),
        zip_code: Some("30500".into()),
        phone_number: Some("+972-546160636".into()),
    });

    let alon = share(Person {
        name: name("Alon", "Fliess"),
        age: 43,
        address: Some(address.clone()),
        spouse: None,
    });
    let liat = share(Person {
        name: name("Liat", "Fliess"),
        age: 40,
        address: Some(address),
        spouse: Some(alon.clone()),
    });
    alon.borrow_mut().spouse = Some(liat.clone());

    (liat, alon)
}

fn unlink(person: &Shared<Person>) {
    let spouse = person.borrow_mut().spouse.take();
    if let Some(spouse) = spouse {
        spouse.borrow_mut().spouse = None;
    }
}

fn spouse_of(person: &Shared<Person>) -> Shared<Person> {
    person.borrow().spouse.clone().unwrap()
}

fn address_of(person: &Shared<Person>) -> Shared<Address> {
    person.borrow().address.clone().unwrap()
}

// -----------------------------------------------------------------------------
// Round trips

#[test]
fn liat_and_alon_round_trip() {
    let (liat, alon) = liat_and_alon();
    let serializer = ObjectSerializer::new(registry());

    let mut buffer = Vec::new();
    serializer.serialize_object(&liat, &mut buffer).unwrap();
    let new_liat: Shared<Person> = serializer.deserialize_object(buffer.as_slice()).unwrap();

    let new_alon = spouse_of(&new_liat);
    assert!(Rc::ptr_eq(&spouse_of(&new_alon), &new_liat));
    assert!(Rc::ptr_eq(&address_of(&new_liat), &address_of(&new_alon)));
    assert!(!Rc::ptr_eq(&new_liat, &liat));

    assert_eq!(new_liat.borrow().age, 40);
    assert_eq!(new_alon.borrow().age, 43);
    assert_eq!(*address_of(&new_liat).borrow(), *address_of(&liat).borrow());
    assert_eq!(
        *new_alon.borrow().name.clone().unwrap().borrow(),
        *alon.borrow().name.clone().unwrap().borrow()
    );

    unlink(&liat);
    unlink(&new_liat);
}

#[test]
fn each_instance_is_expanded_once() {
    let (liat, _alon) = liat_and_alon();
    let serializer = ObjectSerializer::new(registry());

    let tree = serializer.interpret(&Value::from(liat.clone())).unwrap();

    let mut objects = Vec::new();
    let mut copy_refs = Vec::new();
    collect(&tree, &mut objects, &mut copy_refs);

    // Liat, Alon, two names and one address.
    assert_eq!(objects.len(), 5);
    // Alon's address and Alon's spouse.
    assert_eq!(copy_refs.len(), 2);
    for token in &copy_refs {
        assert!(objects.contains(token), "dangling token {token}");
    }

    let Descriptor::Object(root) = &tree else {
        unreachable!()
    };
    assert!(root.id().starts_with("1&Person&"));
    assert!(root.fields().is_empty());
    assert_eq!(root.properties().len(), 4);

    unlink(&liat);
}

fn collect(tree: &Descriptor, objects: &mut Vec<String>, copy_refs: &mut Vec<String>) {
    match tree {
        Descriptor::Object(object) => {
            objects.push(object.id().into());
            for member in object.fields().iter().chain(object.properties()) {
                collect(member, objects, copy_refs);
            }
        }
        Descriptor::CopyRef(copy_ref) => copy_refs.push(copy_ref.token().into()),
        Descriptor::Null(_) | Descriptor::Primitive(_) => {}
    }
}

#[test]
fn descriptor_tree_survives_the_wire() {
    let (liat, _alon) = liat_and_alon();

    for options in [WireOptions::default(), WireOptions::COMPACT] {
        let serializer = ObjectSerializer::new(registry()).with_options(options);
        let tree = serializer.interpret(&Value::from(liat.clone())).unwrap();

        let xml = og_serial::wire::write_document(&tree, options);
        assert_eq!(og_serial::wire::read_document(&xml).unwrap(), tree);
        assert_eq!(xml.starts_with("<?xml"), options.declaration);
    }

    unlink(&liat);
}

#[test]
fn nulls_stay_null() {
    let lonely = share(Person {
        age: 7,
        ..Person::default()
    });
    let serializer = ObjectSerializer::new(registry());

    let xml = serializer.to_xml_string(&Value::from(lonely)).unwrap();
    assert!(xml.contains(r#"<Null name="spouse" />"#));

    let back = serializer.from_xml_str(&xml).unwrap();
    let back = back.as_object().unwrap().downcast::<Person>().unwrap();
    assert!(back.borrow().spouse.is_none());
    assert!(back.borrow().address.is_none());
    assert_eq!(back.borrow().age, 7);
}

#[derive(Reflect, Default, Clone, Debug, PartialEq)]
#[reflect(type_path = "people::Glyph")]
pub struct Glyph {
    pub mark: char,
    pub label: String,
}

#[test]
fn control_characters_round_trip() {
    let mut registry = TypeRegistry::new();
    registry.register::<Glyph>();
    let serializer = ObjectSerializer::new(registry);

    for glyph in [
        Glyph::default(),
        Glyph {
            mark: 'a',
            label: "bell\u{7} at c:\\tmp".into(),
        },
    ] {
        let mut bytes = Vec::new();
        serializer
            .serialize_object(&share(glyph.clone()), &mut bytes)
            .unwrap();
        let back = serializer
            .deserialize_object::<Glyph, _>(bytes.as_slice())
            .unwrap();
        assert_eq!(*back.borrow(), glyph);
    }
}

// -----------------------------------------------------------------------------
// Filtering

#[test]
fn filtered_members_are_skipped() {
    let (liat, _alon) = liat_and_alon();
    let serializer = ObjectSerializer::new(registry()).with_member_filter(|name| name == "spouse");

    let tree = serializer.interpret(&Value::from(liat.clone())).unwrap();
    let Descriptor::Object(root) = &tree else {
        unreachable!()
    };
    assert!(root.property("spouse").is_none());
    assert!(root.property("address").is_some());

    let new_liat: Shared<Person> = serializer
        .deserialize_object(serializer.to_xml_string(&Value::from(liat.clone())).unwrap().as_bytes())
        .unwrap();
    assert!(new_liat.borrow().spouse.is_none());
    assert_eq!(new_liat.borrow().age, 40);

    unlink(&liat);
}

// -----------------------------------------------------------------------------
// Property rules

/// A thermometer whose `fahrenheit` property is computed from a stored field,
/// and whose `celsius` property is stored in `celsius_store`.
#[derive(Default)]
pub struct Thermometer {
    celsius_store: f64,
    label: String,
}

impl TypePath for Thermometer {
    fn type_path() -> &'static str {
        "weather::Thermometer"
    }

    fn type_name() -> &'static str {
        "Thermometer"
    }
}

impl Typed for Thermometer {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| {
            TypeInfo::Object(ObjectInfo::new::<Self>(
                &[
                    FieldInfo::new::<f64>("celsius_store").backing("celsius"),
                    FieldInfo::new::<String>("label"),
                ],
                &[
                    PropertyInfo::new::<f64>("celsius"),
                    PropertyInfo::new::<f64>("fahrenheit").computed(),
                ],
            ))
        })
    }
}

impl Reflect for Thermometer {
    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "celsius_store" => Some(self.celsius_store.to_value()),
            "label" => Some(self.label.to_value()),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: Value) -> Result<(), ReflectError> {
        match name {
            "celsius_store" => self.celsius_store = f64::from_value(value)?,
            "label" => self.label = String::from_value(value)?,
            _ => return Err(ReflectError::missing_member::<Self>(name)),
        }
        Ok(())
    }

    fn property(&self, name: &str) -> Option<Value> {
        match name {
            "celsius" => Some(self.celsius_store.to_value()),
            "fahrenheit" => Some((self.celsius_store * 1.8 + 32.0).to_value()),
            _ => None,
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> Result<(), ReflectError> {
        match name {
            "celsius" => self.celsius_store = f64::from_value(value)?,
            "fahrenheit" => self.celsius_store = (f64::from_value(value)? - 32.0) / 1.8,
            _ => return Err(ReflectError::missing_member::<Self>(name)),
        }
        Ok(())
    }
}

impl GetTypeMeta for Thermometer {
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of_object::<Self>()
    }
}

#[test]
fn backing_fields_and_computed_properties_are_skipped() {
    let mut registry = TypeRegistry::new();
    registry.register::<Thermometer>();
    let serializer = ObjectSerializer::new(registry);

    let thermometer = share(Thermometer {
        celsius_store: 21.5,
        label: "porch".into(),
    });
    let tree = serializer.interpret(&Value::from(thermometer)).unwrap();
    let Descriptor::Object(root) = &tree else {
        unreachable!()
    };

    let fields: Vec<_> = root.fields().iter().map(Descriptor::source_name).collect();
    let properties: Vec<_> = root.properties().iter().map(Descriptor::source_name).collect();
    assert_eq!(fields, ["label"]);
    assert_eq!(properties, ["celsius"]);

    let back = serializer.analyze(&tree).unwrap();
    let back = back.as_object().unwrap().downcast::<Thermometer>().unwrap();
    assert_eq!(back.borrow().celsius_store, 21.5);
    assert_eq!(back.borrow().label, "porch");
}

#[derive(Reflect, Default)]
#[reflect(type_path = "people::Badge")]
pub struct Badge {
    #[reflect(property, readonly)]
    pub serial: u64,
    pub holder: Option<String>,
}

#[test]
fn readonly_properties_are_not_written() {
    let mut registry = TypeRegistry::new();
    registry.register::<Badge>();
    let serializer = ObjectSerializer::new(registry);

    let badge = share(Badge {
        serial: 12,
        holder: None,
    });
    let xml = serializer.to_xml_string(&Value::from(badge)).unwrap();
    assert!(!xml.contains("serial"));

    let forced = xml.replace(
        "<properties />",
        r#"<properties><Primitive name="serial" type="u64">5</Primitive></properties>"#,
    );
    assert!(matches!(
        serializer.from_xml_str(&forced),
        Err(SerialError::Conversion {
            source: ReflectError::ReadOnly { .. },
            ..
        })
    ));
}

// -----------------------------------------------------------------------------
// Rejections

#[derive(Reflect, Default)]
struct Secret {
    code: u32,
}

#[test]
fn non_public_types_are_unsupported() {
    let serializer = ObjectSerializer::new(TypeRegistry::new());
    let secret = share(Secret { code: 1 });
    assert_eq!(secret.borrow().code, 1);

    assert!(matches!(
        serializer.to_xml_string(&Value::from(secret)),
        Err(SerialError::UnsupportedType {
            type_path: "person_graph::Secret"
        })
    ));
}

const TWO_PEOPLE: &str = r#"<serializeInfo>
  <Object name="" type="people::Person" id="1&amp;Person&amp;0">
    <fields />
    <properties>
      <Primitive name="age" type="i32">40</Primitive>
      <SPOUSE_SLOT />
    </properties>
  </Object>
</serializeInfo>"#;

fn with_spouse(spouse: &str) -> String {
    TWO_PEOPLE.replace("<SPOUSE_SLOT />", spouse)
}

#[test]
fn dangling_reference() {
    let serializer = ObjectSerializer::new(registry());
    let xml = with_spouse(r#"<CopyRef name="spouse" type="people::Person">9&amp;Person&amp;0</CopyRef>"#);
    assert!(matches!(
        serializer.from_xml_str(&xml),
        Err(SerialError::DanglingReference { token }) if token == "9&Person&0"
    ));
}

#[test]
fn self_reference_resolves() {
    let serializer = ObjectSerializer::new(registry());
    let xml = with_spouse(r#"<CopyRef name="spouse" type="people::Person">1&amp;Person&amp;0</CopyRef>"#);
    let person: Shared<Person> = serializer.deserialize_object(xml.as_bytes()).unwrap();
    assert!(Rc::ptr_eq(&spouse_of(&person), &person));
    person.borrow_mut().spouse = None;
}

#[test]
fn resolution_and_conversion_failures() {
    let serializer = ObjectSerializer::new(registry());

    let unknown = TWO_PEOPLE
        .replace("people::Person", "people::Robot")
        .replace("<SPOUSE_SLOT />", "");
    assert!(matches!(
        serializer.from_xml_str(&unknown),
        Err(SerialError::TypeResolution { .. })
    ));

    let bad_literal = with_spouse("").replace(">40<", ">forty<");
    assert!(matches!(
        serializer.from_xml_str(&bad_literal),
        Err(SerialError::Conversion {
            source: ReflectError::InvalidLiteral { .. },
            ..
        })
    ));

    let wrong_kind = with_spouse(r#"<Primitive name="spouse" type="i32">1</Primitive>"#);
    assert!(matches!(
        serializer.from_xml_str(&wrong_kind),
        Err(SerialError::Conversion {
            source: ReflectError::TypeMismatch { .. },
            ..
        })
    ));

    let null_age = TWO_PEOPLE
        .replace(r#"<Primitive name="age" type="i32">40</Primitive>"#, r#"<Null name="age" />"#)
        .replace("<SPOUSE_SLOT />", "");
    assert!(matches!(
        serializer.from_xml_str(&null_age),
        Err(SerialError::Conversion {
            source: ReflectError::UnexpectedNull { .. },
            ..
        })
    ));

    let missing = with_spouse(r#"<Null name="nickname" />"#);
    assert!(matches!(
        serializer.from_xml_str(&missing),
        Err(SerialError::MissingMember { kind: "property", member, .. }) if member == "nickname"
    ));

    let as_field = TWO_PEOPLE
        .replace("<fields />", r#"<fields><Null name="spouse" /></fields>"#)
        .replace("<SPOUSE_SLOT />", "");
    assert!(matches!(
        serializer.from_xml_str(&as_field),
        Err(SerialError::MissingMember { kind: "field", .. })
    ));
}

#[test]
fn duplicated_object_id_is_malformed() {
    let serializer = ObjectSerializer::new(registry());
    let xml = with_spouse(
        r#"<Object name="spouse" type="people::Person" id="1&amp;Person&amp;0"><fields /><properties /></Object>"#,
    );
    assert!(matches!(
        serializer.from_xml_str(&xml),
        Err(SerialError::MalformedDocument(_))
    ));
}

#[test]
fn wrong_root_type() {
    let serializer = ObjectSerializer::new(registry());
    let xml = serializer
        .to_xml_string(&Value::from(share(Address::default())))
        .unwrap();
    assert!(matches!(
        serializer.deserialize_object::<Person, _>(xml.as_bytes()),
        Err(SerialError::TypeResolution { .. })
    ));

    let tree = serializer
        .interpret(&Value::from(share(Address::default())))
        .unwrap();
    assert_eq!(tree.kind(), DescriptorKind::Object);
}
