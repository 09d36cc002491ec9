use core::fmt;

use og_utils::hash::HashMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::descriptor::Descriptor;

// -----------------------------------------------------------------------------
// MemberMap

/// The members of one kind (fields or properties) of an object descriptor.
///
/// Keeps insertion order and rejects a second member with the same
/// [`source_name`](Descriptor::source_name).
#[derive(Clone, Default)]
pub struct MemberMap {
    members: Vec<Descriptor>,
    indices: HashMap<String, usize>,
}

impl MemberMap {
    /// Creates an empty map.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with space for `capacity` members.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            members: Vec::with_capacity(capacity),
            indices: HashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Appends `descriptor`.
    ///
    /// Gives the descriptor back if a member with the same name exists.
    pub fn push(&mut self, descriptor: Descriptor) -> Result<(), Descriptor> {
        if self.indices.contains_key(descriptor.source_name()) {
            return Err(descriptor);
        }
        self.indices
            .insert(descriptor.source_name().to_owned(), self.members.len());
        self.members.push(descriptor);
        Ok(())
    }

    /// Returns the member named `name`.
    pub fn get(&self, name: &str) -> Option<&Descriptor> {
        self.members.get(*self.indices.get(name)?)
    }

    /// Returns an iterator over the members in insertion order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Descriptor> {
        self.members.iter()
    }

    /// Returns the number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if there are no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<'a> IntoIterator for &'a MemberMap {
    type Item = &'a Descriptor;
    type IntoIter = core::slice::Iter<'a, Descriptor>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for MemberMap {
    /// Same members in the same order.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl fmt::Debug for MemberMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.members).finish()
    }
}

impl Serialize for MemberMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.members)
    }
}

impl<'de> Deserialize<'de> for MemberMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let members = Vec::<Descriptor>::deserialize(deserializer)?;

        let mut map = Self::with_capacity(members.len());
        for member in members {
            if let Err(duplicate) = map.push(member) {
                return Err(D::Error::custom(format_args!(
                    "duplicate member `{}`",
                    duplicate.source_name()
                )));
            }
        }
        Ok(map)
    }
}
