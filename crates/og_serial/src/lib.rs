//! Serialize object graphs with shared and cyclic references to XML.
//!
//! Serialization runs in two stages, each usable on its own:
//!
//! 1. The [`interpreter`] turns a live graph into a [`descriptor`] tree and
//!    back. Every instance is expanded once; later occurrences become
//!    back-references, which is how cycles end and sharing survives.
//! 2. The [`wire`] codec turns a descriptor tree into XML text and back.
//!
//! [`ObjectSerializer`] chains both stages over byte streams.
//!
//! Types are described through [`og_reflect`]: derive `Reflect` on every
//! struct in the graph and register the root types in the
//! [`TypeRegistry`](og_reflect::registry::TypeRegistry) handed to the
//! serializer.
//!
//! # Logging
//!
//! Progress is reported through the [`log`] facade: `trace` per object,
//! `debug` per back-reference and per call. No logger is installed.
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod serializer;

pub mod descriptor;
pub mod interpreter;
pub mod wire;

// -----------------------------------------------------------------------------
// Exports

pub use error::SerialError;
pub use serializer::ObjectSerializer;
pub use wire::WireOptions;
