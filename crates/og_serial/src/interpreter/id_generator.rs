use og_reflect::ObjectRef;
use og_utils::hash::HashMap;

// -----------------------------------------------------------------------------
// IdGenerator

/// Numbers object instances by reference identity, starting at 1.
///
/// Every numbered instance is kept alive until the generator is dropped, so
/// an address seen during a session is never reused by another instance.
#[derive(Default)]
pub(crate) struct IdGenerator {
    ids: HashMap<usize, u64>,
    alive: Vec<ObjectRef>,
}

impl IdGenerator {
    /// Returns the id of `object`, and whether it was assigned just now.
    pub fn get_id(&mut self, object: &ObjectRef) -> (u64, bool) {
        let addr = object.addr();
        if let Some(&id) = self.ids.get(&addr) {
            return (id, false);
        }

        self.alive.push(object.clone());
        let id = self.alive.len() as u64;
        self.ids.insert(addr, id);
        (id, true)
    }

    /// The number of distinct instances seen.
    #[inline]
    pub fn len(&self) -> usize {
        self.alive.len()
    }
}

#[cfg(test)]
mod tests {
    use og_reflect::derive::Reflect;
    use og_reflect::{ObjectRef, share};

    use super::IdGenerator;

    #[derive(Reflect, Default)]
    pub struct Cell {
        pub n: i32,
    }

    #[test]
    fn ids_follow_identity() {
        let a = share(Cell::default());
        let b = share(Cell::default());

        let mut ids = IdGenerator::default();
        assert_eq!(ids.get_id(&ObjectRef::new(a.clone())), (1, true));
        assert_eq!(ids.get_id(&ObjectRef::new(b)), (2, true));
        assert_eq!(ids.get_id(&ObjectRef::new(a)), (1, false));
        assert_eq!(ids.len(), 2);
    }
}
