use core::any::Any;
use core::cell::{Ref, RefCell, RefMut};
use core::fmt;
use alloc::rc::Rc;

use crate::Reflect;
use crate::info::{TypeInfo, TypePath, Typed};

// -----------------------------------------------------------------------------
// Shared

/// A shared, mutable object that takes part in a graph.
///
/// Two members refer to the *same* instance when their `Shared` pointers are
/// equal by address ([`Rc::ptr_eq`]).
pub type Shared<T> = Rc<RefCell<T>>;

/// Wraps `value` into a new [`Shared`] instance.
#[inline]
pub fn share<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

// -----------------------------------------------------------------------------
// ObjectRef

/// A type-erased handle to a [`Shared`] object.
///
/// Cloning the handle clones the reference, not the object: the clone keeps
/// the identity of the instance.
///
/// # Examples
///
/// ```
/// use og_reflect::{derive::Reflect, share, ObjectRef};
///
/// #[derive(Reflect, Default)]
/// pub struct Room {
///     pub number: u32,
/// }
///
/// let room = share(Room { number: 7 });
/// let a = ObjectRef::new(room.clone());
/// let b = a.clone();
///
/// assert!(a.ptr_eq(&b));
/// assert!(a.is(&room));
/// assert_eq!(a.type_info().type_name(), "Room");
///
/// let typed = a.downcast::<Room>().unwrap();
/// assert_eq!(typed.borrow().number, 7);
/// ```
#[derive(Clone)]
pub struct ObjectRef {
    object: Rc<RefCell<dyn Reflect>>,
    any: Rc<dyn Any>,
    type_info: &'static TypeInfo,
}

impl ObjectRef {
    /// Erases the type of a shared object.
    pub fn new<T: Reflect + Typed>(shared: Shared<T>) -> Self {
        let any: Rc<dyn Any> = shared.clone();
        Self {
            object: shared,
            any,
            type_info: T::type_info(),
        }
    }

    /// Returns the [`TypeInfo`] of the referenced object.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        self.type_info
    }

    /// Returns the address of the referenced instance.
    ///
    /// Stable while any handle to the instance is alive.
    #[inline]
    pub fn addr(&self) -> usize {
        Rc::as_ptr(&self.any).cast::<()>() as usize
    }

    /// Returns `true` if both handles refer to the same instance.
    #[inline]
    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        self.addr() == other.addr()
    }

    /// Returns `true` if this handle refers to the instance `shared`.
    #[inline]
    pub fn is<T: 'static>(&self, shared: &Shared<T>) -> bool {
        self.addr() == Rc::as_ptr(shared).cast::<()>() as usize
    }

    /// Recovers the typed [`Shared`] pointer, if the object is a `T`.
    #[inline]
    pub fn downcast<T: 'static>(&self) -> Option<Shared<T>> {
        Rc::downcast::<RefCell<T>>(self.any.clone()).ok()
    }

    /// Immutably borrows the object.
    ///
    /// # Panics
    ///
    /// Panics if the object is currently mutably borrowed.
    #[inline]
    pub fn borrow(&self) -> Ref<'_, dyn Reflect> {
        self.object.borrow()
    }

    /// Mutably borrows the object.
    ///
    /// # Panics
    ///
    /// Panics if the object is currently borrowed.
    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, dyn Reflect> {
        self.object.borrow_mut()
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:#x}", self.type_info.type_path(), self.addr())
    }
}

impl PartialEq for ObjectRef {
    /// Identity comparison, see [`ObjectRef::ptr_eq`].
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for ObjectRef {}

// -----------------------------------------------------------------------------
// Primitive

/// A scalar or string, copied by value.
///
/// [`Display`](fmt::Display) produces the canonical text of the value, which
/// the [`TypeRegistry`](crate::registry::TypeRegistry) parses back.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
    F32(f32),
    F64(f64),
    String(String),
}

macro_rules! impl_primitive {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        impl Primitive {
            /// Returns the [`TypeInfo`] of the held scalar.
            pub fn type_info(&self) -> &'static TypeInfo {
                match self {
                    $(Self::$variant(_) => <$ty as Typed>::type_info(),)*
                }
            }

            /// Returns the type path of the held scalar.
            pub fn type_path(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => <$ty as TypePath>::type_path(),)*
                }
            }
        }

        impl fmt::Display for Primitive {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Self::$variant(v) => fmt::Display::fmt(v, f),)*
                }
            }
        }

        $(
            impl From<$ty> for Primitive {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::Primitive(Primitive::$variant(value))
                }
            }
        )*
    };
}

impl_primitive!(
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
    F32(f32),
    F64(f64),
    String(String),
);

// -----------------------------------------------------------------------------
// Value

/// A type-erased member value.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// No value.
    #[default]
    Null,
    /// A scalar or string.
    Primitive(Primitive),
    /// A reference to a shared object.
    Object(ObjectRef),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the [`TypeInfo`] of the held value, `None` for null.
    pub fn type_info(&self) -> Option<&'static TypeInfo> {
        match self {
            Self::Null => None,
            Self::Primitive(p) => Some(p.type_info()),
            Self::Object(o) => Some(o.type_info()),
        }
    }

    /// Returns the type path of the held value, `"null"` for null.
    pub fn type_path(&self) -> &'static str {
        self.type_info().map_or("null", TypeInfo::type_path)
    }

    /// Returns the object reference, if this is an object.
    #[inline]
    pub const fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Returns the primitive, if this is a primitive.
    #[inline]
    pub const fn as_primitive(&self) -> Option<&Primitive> {
        match self {
            Self::Primitive(p) => Some(p),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Primitive(Primitive::String(value.into()))
    }
}

impl From<ObjectRef> for Value {
    #[inline]
    fn from(value: ObjectRef) -> Self {
        Self::Object(value)
    }
}

impl<T: Reflect + Typed> From<Shared<T>> for Value {
    #[inline]
    fn from(value: Shared<T>) -> Self {
        Self::Object(ObjectRef::new(value))
    }
}
