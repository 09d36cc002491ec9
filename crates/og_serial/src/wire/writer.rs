use crate::descriptor::{
    CopyRefDescriptor, Descriptor, DescriptorKind, DescriptorVisitor, MemberMap, NullDescriptor,
    ObjectDescriptor, PrimitiveDescriptor,
};

use super::escape::{encode, needs_encoding};
use super::{ESCAPED_ATTR, FIELDS_TAG, ID_ATTR, NAME_ATTR, PROPERTIES_TAG, ROOT_TAG, TYPE_ATTR};

// -----------------------------------------------------------------------------
// WireOptions

/// Layout of the written document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WireOptions {
    /// Spaces per nesting level, `None` writes everything on one line.
    pub indent: Option<usize>,
    /// Whether to start with `<?xml version="1.0" encoding="utf-8"?>`.
    pub declaration: bool,
}

impl Default for WireOptions {
    fn default() -> Self {
        Self {
            indent: Some(2),
            declaration: true,
        }
    }
}

impl WireOptions {
    /// Single line, no declaration.
    pub const COMPACT: Self = Self {
        indent: None,
        declaration: false,
    };
}

// -----------------------------------------------------------------------------
// write_document

/// Renders `descriptor` as an XML document.
///
/// # Examples
///
/// ```
/// use og_serial::descriptor::Descriptor;
/// use og_serial::wire::{write_document, WireOptions};
///
/// let tree = Descriptor::primitive("", "alloc::string::String", "a < b");
/// let xml = write_document(&tree, WireOptions::COMPACT);
/// assert_eq!(
///     xml,
///     r#"<serializeInfo><Primitive name="" type="alloc::string::String">a &lt; b</Primitive></serializeInfo>"#,
/// );
/// ```
pub fn write_document(descriptor: &Descriptor, options: WireOptions) -> String {
    let mut writer = WireWriter {
        out: String::new(),
        options,
        depth: 0,
    };

    if options.declaration {
        writer.out.push_str(r#"<?xml version="1.0" encoding="utf-8"?>"#);
        writer.newline();
    }
    writer.open(ROOT_TAG, &[]);
    writer.depth += 1;
    descriptor.accept(&mut writer);
    writer.depth -= 1;
    writer.close(ROOT_TAG);
    writer.newline();

    writer.out
}

// -----------------------------------------------------------------------------
// WireWriter

struct WireWriter {
    out: String,
    options: WireOptions,
    depth: usize,
}

impl WireWriter {
    fn newline(&mut self) {
        if self.options.indent.is_some() {
            self.out.push('\n');
        }
    }

    fn pad(&mut self) {
        if let Some(width) = self.options.indent {
            self.out.extend(core::iter::repeat_n(' ', width * self.depth));
        }
    }

    /// Writes `<tag attrs...`, returns whether the element is encoded.
    ///
    /// An element is encoded when one of its attributes or its `text` holds a
    /// character XML cannot carry. All of them are then written through
    /// [`encode`].
    fn start_tag(&mut self, tag: &str, attrs: &[(&str, &str)], text: Option<&str>) -> bool {
        let encoded = attrs.iter().any(|(_, value)| needs_encoding(value))
            || text.is_some_and(needs_encoding);

        self.pad();
        self.out.push('<');
        self.out.push_str(tag);
        for (key, value) in attrs {
            self.attribute(key, value, encoded);
        }
        if encoded {
            self.attribute(ESCAPED_ATTR, "true", false);
        }
        encoded
    }

    fn attribute(&mut self, key: &str, value: &str, encoded: bool) {
        self.out.push(' ');
        self.out.push_str(key);
        self.out.push_str("=\"");
        if encoded {
            escape_into(&mut self.out, &encode(value), true);
        } else {
            escape_into(&mut self.out, value, true);
        }
        self.out.push('"');
    }

    fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.start_tag(tag, attrs, None);
        self.out.push('>');
        self.newline();
    }

    fn close(&mut self, tag: &str) {
        self.pad();
        self.end_tag(tag);
    }

    fn end_tag(&mut self, tag: &str) {
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }

    fn empty(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.start_tag(tag, attrs, None);
        self.out.push_str(" />");
        self.newline();
    }

    fn text_element(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) {
        let encoded = self.start_tag(tag, attrs, Some(text));
        self.out.push('>');
        if encoded {
            escape_into(&mut self.out, &encode(text), false);
        } else {
            escape_into(&mut self.out, text, false);
        }
        self.end_tag(tag);
        self.newline();
    }

    fn group(&mut self, tag: &str, members: &MemberMap) {
        if members.is_empty() {
            self.empty(tag, &[]);
            return;
        }
        self.open(tag, &[]);
        self.depth += 1;
        for member in members {
            member.accept(self);
        }
        self.depth -= 1;
        self.close(tag);
        self.newline();
    }
}

impl DescriptorVisitor for WireWriter {
    type Output = ();

    fn visit_null(&mut self, descriptor: &NullDescriptor) {
        self.empty(
            DescriptorKind::Null.tag(),
            &[(NAME_ATTR, descriptor.source_name())],
        );
    }

    fn visit_primitive(&mut self, descriptor: &PrimitiveDescriptor) {
        self.text_element(
            DescriptorKind::Primitive.tag(),
            &[
                (NAME_ATTR, descriptor.source_name()),
                (TYPE_ATTR, descriptor.source_type()),
            ],
            descriptor.value(),
        );
    }

    fn visit_copy_ref(&mut self, descriptor: &CopyRefDescriptor) {
        self.text_element(
            DescriptorKind::CopyRef.tag(),
            &[
                (NAME_ATTR, descriptor.source_name()),
                (TYPE_ATTR, descriptor.source_type()),
            ],
            descriptor.token(),
        );
    }

    fn visit_object(&mut self, descriptor: &ObjectDescriptor) {
        let tag = DescriptorKind::Object.tag();
        self.open(
            tag,
            &[
                (NAME_ATTR, descriptor.source_name()),
                (TYPE_ATTR, descriptor.source_type()),
                (ID_ATTR, descriptor.id()),
            ],
        );
        self.depth += 1;
        self.group(FIELDS_TAG, descriptor.fields());
        self.group(PROPERTIES_TAG, descriptor.properties());
        self.depth -= 1;
        self.close(tag);
        self.newline();
    }
}

// -----------------------------------------------------------------------------
// Escaping

/// Escapes markup characters, and the whitespace an XML parser would
/// otherwise normalize away.
fn escape_into(out: &mut String, text: &str, attribute: bool) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\r' => out.push_str("&#13;"),
            '"' if attribute => out.push_str("&quot;"),
            '\n' if attribute => out.push_str("&#10;"),
            '\t' if attribute => out.push_str("&#9;"),
            ch => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{WireOptions, write_document};
    use crate::descriptor::{Descriptor, ObjectDescriptor};

    #[test]
    fn indented_layout() {
        let mut object = ObjectDescriptor::new("", "t::Pair", "1&Pair&5");
        object
            .add_field(Descriptor::primitive("left", "i32", "1"))
            .unwrap();
        object.add_field(Descriptor::null("right")).unwrap();

        let xml = write_document(&Descriptor::Object(object), WireOptions::default());
        let expected = concat!(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n",
            "<serializeInfo>\n",
            "  <Object name=\"\" type=\"t::Pair\" id=\"1&amp;Pair&amp;5\">\n",
            "    <fields>\n",
            "      <Primitive name=\"left\" type=\"i32\">1</Primitive>\n",
            "      <Null name=\"right\" />\n",
            "    </fields>\n",
            "    <properties />\n",
            "  </Object>\n",
            "</serializeInfo>\n",
        );
        assert_eq!(xml, expected);
    }

    #[test]
    fn escapes_attributes() {
        let tree = Descriptor::copy_ref("a\"b", "t::T", "1&T&0");
        let xml = write_document(&tree, WireOptions::COMPACT);
        assert!(xml.contains(r#"name="a&quot;b""#));
        assert!(xml.contains(">1&amp;T&amp;0</CopyRef>"));
    }

    #[test]
    fn encodes_restricted_characters() {
        let tree = Descriptor::primitive("", "char", "\0");
        let xml = write_document(&tree, WireOptions::COMPACT);
        assert!(xml.contains(r#"<Primitive name="" type="char" escaped="true">\u{0}</Primitive>"#));
        assert!(!xml.contains('\0'));

        let tree = Descriptor::primitive("s", "alloc::string::String", "bell\u{7} c:\\");
        let xml = write_document(&tree, WireOptions::COMPACT);
        assert!(xml.contains(r#"escaped="true">bell\u{7} c:\\</Primitive>"#));

        let plain = Descriptor::primitive("s", "alloc::string::String", "c:\\");
        let xml = write_document(&plain, WireOptions::COMPACT);
        assert!(xml.contains(r#"type="alloc::string::String">c:\</Primitive>"#));
    }
}
