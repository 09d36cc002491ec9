use core::fmt;

// -----------------------------------------------------------------------------
// DescriptorKind

/// The four node kinds of a descriptor tree.
///
/// Each kind has a wire tag equal to its name, matched case-insensitively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DescriptorKind {
    Null,
    Primitive,
    CopyRef,
    Object,
}

impl DescriptorKind {
    /// All kinds.
    pub const ALL: [DescriptorKind; 4] = [Self::Null, Self::Primitive, Self::CopyRef, Self::Object];

    /// Returns the wire tag.
    #[inline]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Primitive => "Primitive",
            Self::CopyRef => "CopyRef",
            Self::Object => "Object",
        }
    }

    /// Returns `true` if `tag` names this kind, ignoring ASCII case.
    #[inline]
    pub fn matches(self, tag: &str) -> bool {
        self.tag().eq_ignore_ascii_case(tag)
    }

    /// Finds the kind named by `tag`, ignoring ASCII case.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.matches(tag))
    }
}

impl fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::DescriptorKind;

    #[test]
    fn tags_ignore_case() {
        assert_eq!(DescriptorKind::from_tag("copyref"), Some(DescriptorKind::CopyRef));
        assert_eq!(DescriptorKind::from_tag("OBJECT"), Some(DescriptorKind::Object));
        assert_eq!(DescriptorKind::from_tag("Collection"), None);
    }
}
