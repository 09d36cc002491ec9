use core::any::Any;

use crate::info::DynamicTyped;
use crate::{ReflectError, Value};

// -----------------------------------------------------------------------------
// Reflect

/// Member-level access to an object whose type is only known at runtime.
///
/// Fields and properties are two separate namespaces. Values cross this
/// boundary type-erased, as [`Value`]; the [`Member`] implementation of the
/// concrete member type converts in both directions.
///
/// Usually implemented with [`#[derive(Reflect)]`](crate::derive::Reflect).
///
/// # Manually Impl
///
/// A manual implementation is needed for properties backed by custom logic:
///
/// ```
/// use og_reflect::info::{FieldInfo, NonGenericTypeInfoCell, ObjectInfo, PropertyInfo};
/// use og_reflect::info::{TypeInfo, TypePath, Typed};
/// use og_reflect::{Member, Reflect, ReflectError, Value};
///
/// #[derive(Default)]
/// pub struct Celsius {
///     degrees: f64,
/// }
///
/// impl TypePath for Celsius {
///     fn type_path() -> &'static str { "weather::Celsius" }
///     fn type_name() -> &'static str { "Celsius" }
/// }
///
/// impl Typed for Celsius {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Object(ObjectInfo::new::<Self>(
///             &[FieldInfo::new::<f64>("degrees")],
///             &[PropertyInfo::new::<f64>("fahrenheit").computed()],
///         )))
///     }
/// }
///
/// impl Reflect for Celsius {
///     fn field(&self, name: &str) -> Option<Value> {
///         (name == "degrees").then(|| self.degrees.to_value())
///     }
///
///     fn set_field(&mut self, name: &str, value: Value) -> Result<(), ReflectError> {
///         match name {
///             "degrees" => self.degrees = f64::from_value(value)?,
///             _ => return Err(ReflectError::missing_member::<Self>(name)),
///         }
///         Ok(())
///     }
///
///     fn property(&self, name: &str) -> Option<Value> {
///         (name == "fahrenheit").then(|| (self.degrees * 1.8 + 32.0).to_value())
///     }
///
///     fn set_property(&mut self, name: &str, value: Value) -> Result<(), ReflectError> {
///         match name {
///             "fahrenheit" => self.degrees = (f64::from_value(value)? - 32.0) / 1.8,
///             _ => return Err(ReflectError::missing_member::<Self>(name)),
///         }
///         Ok(())
///     }
/// }
///
/// let mut c = Celsius { degrees: 100.0 };
/// assert_eq!(c.property("fahrenheit"), Some(Value::from(212.0_f64)));
///
/// c.set_property("fahrenheit", 32.0_f64.to_value()).unwrap();
/// assert_eq!(c.field("degrees"), Some(Value::from(0.0_f64)));
/// ```
///
/// [`Member`]: crate::Member
pub trait Reflect: Any + DynamicTyped {
    /// Returns the current value of the field `name`.
    ///
    /// Returns `None` if the type has no such field.
    fn field(&self, name: &str) -> Option<Value>;

    /// Assigns `value` to the field `name`.
    fn set_field(&mut self, name: &str, value: Value) -> Result<(), ReflectError>;

    /// Returns the current value of the property `name`.
    ///
    /// Returns `None` if the type has no such property.
    fn property(&self, name: &str) -> Option<Value> {
        let _ = name;
        None
    }

    /// Assigns `value` to the property `name`.
    fn set_property(&mut self, name: &str, value: Value) -> Result<(), ReflectError> {
        let _ = value;
        Err(ReflectError::MissingMember {
            type_path: self.reflect_type_info().type_path(),
            member: name.into(),
        })
    }
}
