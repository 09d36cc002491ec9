use std::io;

use og_reflect::ReflectError;
use thiserror::Error;

/// An error raised while serializing or deserializing an object graph.
///
/// No partial result is ever returned alongside an error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SerialError {
    /// The caller passed an unusable argument, such as a null root.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// A non-public type was reached while serializing.
    #[error("cannot serialize non-public type `{type_path}`")]
    UnsupportedType { type_path: &'static str },
    /// The document does not follow the wire format.
    #[error("malformed document: {0}")]
    MalformedDocument(String),
    /// A type path could not be resolved to a type of the expected kind.
    #[error("cannot resolve type `{type_path}`: {reason}")]
    TypeResolution {
        type_path: String,
        reason: &'static str,
    },
    /// The live type has no member with the given name.
    #[error("type `{type_path}` has no {kind} named `{member}`")]
    MissingMember {
        type_path: String,
        kind: &'static str,
        member: String,
    },
    /// A value could not be parsed or assigned to a member.
    #[error("cannot assign member `{member}`")]
    Conversion {
        member: String,
        #[source]
        source: ReflectError,
    },
    /// A back-reference names an object that has not been built yet.
    #[error("reference `{token}` does not point to an earlier object")]
    DanglingReference { token: String },
    /// Two fields, or two properties, of one object share a name.
    #[error("duplicate {kind} `{name}`")]
    DuplicateMember { kind: &'static str, name: String },
    /// The underlying stream failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl SerialError {
    #[inline]
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedDocument(message.into())
    }

    /// Maps an assignment failure of `member`.
    pub(crate) fn from_reflect(kind: &'static str, member: &str, err: ReflectError) -> Self {
        match err {
            ReflectError::MissingMember { type_path, .. } => Self::MissingMember {
                type_path: type_path.into(),
                kind,
                member: member.into(),
            },
            source => Self::Conversion {
                member: member.into(),
                source,
            },
        }
    }
}
