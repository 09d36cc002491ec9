//! The XML wire format of descriptor trees.
//!
//! ```xml
//! <?xml version="1.0" encoding="utf-8"?>
//! <serializeInfo>
//!   <Object name="" type="people::Person" id="1&amp;Person&amp;2048">
//!     <fields>
//!       <Primitive name="age" type="i32">40</Primitive>
//!       <Null name="spouse" />
//!     </fields>
//!     <properties />
//!   </Object>
//! </serializeInfo>
//! ```
//!
//! Every node is one element named after its [`DescriptorKind`]. The root
//! element holds exactly one node.
//!
//! XML 1.0 cannot carry most control characters, not even as character
//! references. An element whose text or attributes hold one is marked
//! `escaped="true"`, and all of its text and attribute values are then
//! encoded: `\` is written as `\\` and a control character as `\u{HEX}`.
//! Unmarked elements are taken literally.
//!
//! [`DescriptorKind`]: crate::descriptor::DescriptorKind

// -----------------------------------------------------------------------------
// Modules

mod escape;
mod reader;
mod writer;

// -----------------------------------------------------------------------------
// Exports

pub use reader::read_document;
pub use writer::{WireOptions, write_document};

pub(crate) const ROOT_TAG: &str = "serializeInfo";
pub(crate) const FIELDS_TAG: &str = "fields";
pub(crate) const PROPERTIES_TAG: &str = "properties";

pub(crate) const NAME_ATTR: &str = "name";
pub(crate) const TYPE_ATTR: &str = "type";
pub(crate) const ID_ATTR: &str = "id";
pub(crate) const ESCAPED_ATTR: &str = "escaped";
