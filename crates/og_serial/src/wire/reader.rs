use alloc::borrow::Cow;

use roxmltree::{Document, Node};

use crate::SerialError;
use crate::descriptor::{Descriptor, DescriptorKind, ObjectDescriptor};

use super::escape::decode;
use super::{ESCAPED_ATTR, FIELDS_TAG, ID_ATTR, NAME_ATTR, PROPERTIES_TAG, ROOT_TAG, TYPE_ATTR};

// -----------------------------------------------------------------------------
// Handler table

type Handler = for<'a, 'input> fn(Node<'a, 'input>) -> Result<Descriptor, SerialError>;

/// Tried in order, the first handler whose kind matches the element wins.
const HANDLERS: [(DescriptorKind, Handler); 4] = [
    (DescriptorKind::Primitive, read_primitive),
    (DescriptorKind::Object, read_object),
    (DescriptorKind::Null, read_null),
    (DescriptorKind::CopyRef, read_copy_ref),
];

fn dispatch(node: Node<'_, '_>) -> Result<Descriptor, SerialError> {
    let tag = node.tag_name().name();
    for (kind, handler) in HANDLERS {
        if kind.matches(tag) {
            return handler(node);
        }
    }
    Err(SerialError::malformed(format!(
        "unknown element `{tag}` at byte {}",
        node.range().start
    )))
}

// -----------------------------------------------------------------------------
// read_document

/// Parses an XML document produced by [`write_document`](super::write_document).
///
/// Structure is checked strictly: a wrong root element, a root without
/// exactly one element child, an unknown element, or a missing attribute or
/// member group fail with [`SerialError::MalformedDocument`]. References are
/// not checked here.
///
/// # Examples
///
/// ```
/// use og_serial::descriptor::Descriptor;
/// use og_serial::wire::read_document;
///
/// let tree = read_document(r#"<SERIALIZEINFO><null name="" /></SERIALIZEINFO>"#).unwrap();
/// assert_eq!(tree, Descriptor::null(""));
///
/// assert!(read_document("<serializeInfo />").is_err());
/// ```
pub fn read_document(text: &str) -> Result<Descriptor, SerialError> {
    let document =
        Document::parse(text).map_err(|err| SerialError::malformed(err.to_string()))?;

    let root = document.root_element();
    if !root.tag_name().name().eq_ignore_ascii_case(ROOT_TAG) {
        return Err(SerialError::malformed(format!(
            "expected root element `{ROOT_TAG}`, found `{}`",
            root.tag_name().name()
        )));
    }

    let mut children = root.children().filter(Node::is_element);
    match (children.next(), children.next()) {
        (Some(node), None) => dispatch(node),
        (None, _) => Err(SerialError::malformed("document holds no value")),
        (Some(_), Some(_)) => Err(SerialError::malformed("document holds more than one value")),
    }
}

// -----------------------------------------------------------------------------
// Handlers

/// Undoes the writer's encoding on elements marked `escaped="true"`.
fn decoded<'a>(node: Node<'a, '_>, raw: &'a str) -> Result<Cow<'a, str>, SerialError> {
    match node.attribute(ESCAPED_ATTR) {
        None => Ok(Cow::Borrowed(raw)),
        Some("true") => decode(raw),
        Some(other) => Err(SerialError::malformed(format!(
            "element `{}` at byte {} has `{ESCAPED_ATTR}=\"{other}\"`",
            node.tag_name().name(),
            node.range().start
        ))),
    }
}

fn attribute<'a>(node: Node<'a, '_>, name: &str) -> Result<Cow<'a, str>, SerialError> {
    let raw = node.attribute(name).ok_or_else(|| {
        SerialError::malformed(format!(
            "element `{}` at byte {} lacks attribute `{name}`",
            node.tag_name().name(),
            node.range().start
        ))
    })?;
    decoded(node, raw)
}

fn text<'a>(node: Node<'a, '_>) -> Result<Cow<'a, str>, SerialError> {
    decoded(node, node.text().unwrap_or_default())
}

fn group<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Result<Node<'a, 'input>, SerialError> {
    node.children()
        .find(|child| child.is_element() && child.tag_name().name().eq_ignore_ascii_case(tag))
        .ok_or_else(|| {
            SerialError::malformed(format!(
                "object at byte {} lacks element `{tag}`",
                node.range().start
            ))
        })
}

fn read_primitive(node: Node<'_, '_>) -> Result<Descriptor, SerialError> {
    Ok(Descriptor::primitive(
        attribute(node, NAME_ATTR)?,
        attribute(node, TYPE_ATTR)?,
        text(node)?,
    ))
}

fn read_null(node: Node<'_, '_>) -> Result<Descriptor, SerialError> {
    Ok(Descriptor::null(attribute(node, NAME_ATTR)?))
}

fn read_copy_ref(node: Node<'_, '_>) -> Result<Descriptor, SerialError> {
    Ok(Descriptor::copy_ref(
        attribute(node, NAME_ATTR)?,
        attribute(node, TYPE_ATTR)?,
        text(node)?,
    ))
}

fn read_object(node: Node<'_, '_>) -> Result<Descriptor, SerialError> {
    let mut object = ObjectDescriptor::new(
        attribute(node, NAME_ATTR)?,
        attribute(node, TYPE_ATTR)?,
        attribute(node, ID_ATTR)?,
    );

    for child in group(node, FIELDS_TAG)?.children().filter(Node::is_element) {
        object.add_field(dispatch(child)?)?;
    }
    for child in group(node, PROPERTIES_TAG)?.children().filter(Node::is_element) {
        object.add_property(dispatch(child)?)?;
    }

    Ok(Descriptor::Object(object))
}

#[cfg(test)]
mod tests {
    use super::read_document;
    use crate::SerialError;
    use crate::descriptor::Descriptor;
    use crate::wire::{WireOptions, write_document};

    #[test]
    fn tags_ignore_case() {
        let xml = r#"
            <serializeinfo>
              <OBJECT name="" type="t::T" id="1&amp;T&amp;9">
                <fields><primitive name="x" type="i8">-3</primitive></fields>
                <properties><copyref name="me" type="t::T">1&amp;T&amp;9</copyref></properties>
              </OBJECT>
            </serializeinfo>"#;
        let Descriptor::Object(object) = read_document(xml).unwrap() else {
            unreachable!()
        };
        assert_eq!(object.id(), "1&T&9");
        assert_eq!(
            object.field("x"),
            Some(&Descriptor::primitive("x", "i8", "-3"))
        );
        assert_eq!(
            object.property("me"),
            Some(&Descriptor::copy_ref("me", "t::T", "1&T&9"))
        );
    }

    #[test]
    fn text_survives_round_trip() {
        let tree = Descriptor::primitive("", "alloc::string::String", " line\r\nnext\t<&> ");
        let xml = write_document(&tree, WireOptions::default());
        assert_eq!(read_document(&xml).unwrap(), tree);

        let empty = Descriptor::primitive("", "alloc::string::String", "");
        let xml = write_document(&empty, WireOptions::COMPACT);
        assert_eq!(read_document(&xml).unwrap(), empty);
    }

    #[test]
    fn restricted_characters_survive_round_trip() {
        let cases = [
            Descriptor::primitive("", "char", "\0"),
            Descriptor::primitive("s", "alloc::string::String", "bell\u{7}"),
            Descriptor::primitive("s", "alloc::string::String", "\\u{7}\u{1B}[0m"),
            Descriptor::null("odd\u{1}name"),
        ];
        for tree in cases {
            let xml = write_document(&tree, WireOptions::default());
            assert_eq!(read_document(&xml).unwrap(), tree);
        }

        let plain = r#"<serializeInfo><Primitive name="" type="s">c:\u{0}</Primitive></serializeInfo>"#;
        assert_eq!(
            read_document(plain).unwrap(),
            Descriptor::primitive("", "s", "c:\\u{0}")
        );
    }

    #[test]
    fn rejects_malformed() {
        let cases = [
            "not xml",
            r#"<other><Null name="" /></other>"#,
            r#"<serializeInfo><Null name="" /><Null name="" /></serializeInfo>"#,
            r#"<serializeInfo><Collection name="" /></serializeInfo>"#,
            r#"<serializeInfo><Null /></serializeInfo>"#,
            r#"<serializeInfo><Primitive name="x">1</Primitive></serializeInfo>"#,
            r#"<serializeInfo><Object name="" type="t::T" id="1"><fields /></Object></serializeInfo>"#,
            r#"<serializeInfo><Primitive name="" type="s" escaped="true">\q</Primitive></serializeInfo>"#,
            r#"<serializeInfo><Primitive name="" type="s" escaped="yes">a</Primitive></serializeInfo>"#,
        ];
        for xml in cases {
            assert!(
                matches!(read_document(xml), Err(SerialError::MalformedDocument(_))),
                "accepted: {xml}"
            );
        }
    }

    #[test]
    fn rejects_duplicate_fields() {
        let xml = r#"<serializeInfo><Object name="" type="t::T" id="1">
            <fields><Null name="a" /><Null name="a" /></fields><properties />
        </Object></serializeInfo>"#;
        assert!(matches!(
            read_document(xml),
            Err(SerialError::DuplicateMember { kind: "field", .. })
        ));
    }
}
