//! Runtime reflection for object graphs.
//!
//! This crate answers the questions a graph serializer has to ask about types
//! it has never seen:
//!
//! - What is this type called, in a form that can be resolved back later?
//!   See [`info::TypePath`].
//! - Which members does it have, and which of them are plain fields or
//!   properties? See [`info::Typed`] and [`info::ObjectInfo`].
//! - What does a member currently hold, and how do I assign a new value?
//!   See [`Reflect`], [`Member`] and [`Value`].
//! - Given only a type path, how do I create an instance again?
//!   See [`registry::TypeRegistry`].
//!
//! Objects that take part in a graph are held as [`Shared<T>`]
//! (`Rc<RefCell<T>>`); a [`Value::Object`] keeps the reference identity of the
//! instance it points to, so two members that share an instance can be told
//! apart from two members holding equal copies.
//!
//! # Example
//!
//! ```
//! use og_reflect::{derive::Reflect, info::Typed, share, Reflect, Shared, Value};
//!
//! #[derive(Reflect, Default)]
//! pub struct Node {
//!     pub label: String,
//!     pub next: Option<Shared<Node>>,
//! }
//!
//! let tail = share(Node { label: "tail".into(), next: None });
//! let head = Node { label: "head".into(), next: Some(tail.clone()) };
//!
//! let info = Node::type_info().as_object().unwrap();
//! assert_eq!(info.field_len(), 2);
//!
//! let Some(Value::Object(next)) = head.field("next") else { unreachable!() };
//! assert!(next.is(&tail));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

// -----------------------------------------------------------------------------
// Extern Self

// Generated code refers to this crate as `::og_reflect`, which must also
// resolve inside the crate itself (unit tests and doc tests).
extern crate self as og_reflect;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod member;
mod reflection;
mod value;

pub mod info;
pub mod registry;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use error::ReflectError;
pub use member::Member;
pub use og_reflect_derive as derive;
pub use reflection::Reflect;
pub use value::{ObjectRef, Primitive, Shared, Value, share};
