use og_reflect::info::ObjectInfo;
use og_reflect::{ObjectRef, Value};
use og_utils::hash::{HashSet, hash_address};

use super::TOKEN_SEPARATOR;
use super::id_generator::IdGenerator;
use crate::SerialError;
use crate::descriptor::{Descriptor, ObjectDescriptor};

// -----------------------------------------------------------------------------
// Parser

/// Turns an object graph into a descriptor tree.
///
/// The first occurrence of an instance becomes an [`ObjectDescriptor`],
/// every later occurrence becomes a [`Descriptor::CopyRef`] naming its token,
/// so cycles terminate and shared instances stay shared.
///
/// Eligible members, in declaration order:
///
/// - fields, except those storing a property;
/// - writable auto properties.
///
/// Members whose name is accepted by the member filter are skipped.
///
/// # Examples
///
/// ```
/// use og_reflect::{derive::Reflect, share, Shared, Value};
/// use og_serial::descriptor::Descriptor;
/// use og_serial::interpreter::Parser;
///
/// #[derive(Reflect, Default)]
/// pub struct Knot {
///     pub next: Option<Shared<Knot>>,
/// }
///
/// let knot = share(Knot::default());
/// knot.borrow_mut().next = Some(knot.clone());
///
/// let tree = Parser::new().parse(&Value::from(knot.clone()), "").unwrap();
/// let Descriptor::Object(object) = &tree else { unreachable!() };
/// let Some(Descriptor::CopyRef(back)) = object.field("next") else { unreachable!() };
/// assert_eq!(back.token(), object.id());
/// # knot.borrow_mut().next = None;
/// ```
#[derive(Default)]
pub struct Parser<'f> {
    ids: IdGenerator,
    visited: HashSet<String>,
    filter: Option<&'f dyn Fn(&str) -> bool>,
}

impl<'f> Parser<'f> {
    /// Creates a session without member filter.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session skipping every member whose name matches `filter`.
    #[inline]
    pub fn with_filter(filter: &'f dyn Fn(&str) -> bool) -> Self {
        Self {
            filter: Some(filter),
            ..Self::default()
        }
    }

    /// The number of distinct objects met so far.
    #[inline]
    pub fn object_count(&self) -> usize {
        self.ids.len()
    }

    /// Describes `value`, found in the member `name` (empty for the root).
    pub fn parse(&mut self, value: &Value, name: &str) -> Result<Descriptor, SerialError> {
        let object = match value {
            Value::Null => return Ok(Descriptor::null(name)),
            Value::Primitive(primitive) => {
                return Ok(Descriptor::primitive(
                    name,
                    primitive.type_path(),
                    primitive.to_string(),
                ));
            }
            Value::Object(object) => object,
        };

        let type_info = object.type_info();
        let token = self.token(object);

        if self.visited.contains(&token) {
            log::debug!("back-reference `{token}` in member `{name}`");
            return Ok(Descriptor::copy_ref(name, type_info.type_path(), token));
        }

        let info = match type_info.as_object() {
            Some(info) if info.is_public() => info,
            _ => {
                return Err(SerialError::UnsupportedType {
                    type_path: type_info.type_path(),
                });
            }
        };

        self.visited.insert(token.clone());
        log::trace!("expanding `{}` as `{token}`", info.type_path());

        let (fields, properties) = self.collect_members(object, info)?;

        let mut descriptor = ObjectDescriptor::new(name, info.type_path(), token);
        for (member, value) in fields {
            descriptor.add_field(self.parse(&value, member)?)?;
        }
        for (member, value) in properties {
            descriptor.add_property(self.parse(&value, member)?)?;
        }

        Ok(Descriptor::Object(descriptor))
    }

    fn token(&mut self, object: &ObjectRef) -> String {
        let (seq, _) = self.ids.get_id(object);
        let type_name = object.type_info().type_name();
        let hash = hash_address(object.addr());
        format!("{seq}{TOKEN_SEPARATOR}{type_name}{TOKEN_SEPARATOR}{hash}")
    }

    fn is_filtered(&self, member: &str) -> bool {
        self.filter.is_some_and(|filter| filter(member))
    }

    // The borrow ends before any child is parsed.
    fn collect_members(
        &self,
        object: &ObjectRef,
        info: &'static ObjectInfo,
    ) -> Result<(Vec<(&'static str, Value)>, Vec<(&'static str, Value)>), SerialError> {
        let reflect = object.borrow();
        let missing = |kind, member: &str| SerialError::MissingMember {
            type_path: info.type_path().into(),
            kind,
            member: member.into(),
        };

        let fields = info
            .fields()
            .filter(|field| !field.is_backing_field() && !self.is_filtered(field.name()))
            .map(|field| {
                let value = reflect
                    .field(field.name())
                    .ok_or_else(|| missing("field", field.name()))?;
                Ok((field.name(), value))
            })
            .collect::<Result<Vec<_>, SerialError>>()?;

        let properties = info
            .properties()
            .filter(|property| {
                property.is_writable() && property.is_auto() && !self.is_filtered(property.name())
            })
            .map(|property| {
                let value = reflect
                    .property(property.name())
                    .ok_or_else(|| missing("property", property.name()))?;
                Ok((property.name(), value))
            })
            .collect::<Result<Vec<_>, SerialError>>()?;

        Ok((fields, properties))
    }
}
