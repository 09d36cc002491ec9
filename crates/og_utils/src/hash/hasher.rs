//! Provide `FixedHasher`.
//!
//! `FixedHasher` based on `foldhash` crate,
//! Provide stable hash results through a fixed hash seed.

use core::hash::BuildHasher;

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHasher

/// A fixed hash seed.
const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x5A17_0A10_F1E5_5EED);

/// A fixed hasher provided hash results that only related on the input.
///
/// A type alias for [`foldhash::fast::FoldHasher`] .
///
/// Which can be created through [`FixedHashState::build_hasher`].
pub type FixedHasher = FoldHasher<'static>;

/// Fixed Hash State based upon a random but fixed seed.
///
/// # Examples
///
/// ```
/// use core::hash::{Hash, Hasher, BuildHasher};
/// use og_utils::hash::FixedHashState;
///
/// let a = FixedHashState.hash_one(3_u32);
/// let b = FixedHashState.hash_one(3_u32);
///
/// assert_eq!(a, b);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASH_STATE.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// hash_address

/// Folds a memory address into a 32-bit hash.
///
/// The result is stable for a given address within one process, but two
/// different addresses may collide. Only use it for diagnostics, never as an
/// identity.
#[inline]
pub fn hash_address(addr: usize) -> u32 {
    let hash = FixedHashState.hash_one(addr);
    (hash ^ (hash >> 32)) as u32
}

#[cfg(test)]
mod tests {
    use super::hash_address;

    #[test]
    fn address_hash_is_stable() {
        assert_eq!(hash_address(0x1000), hash_address(0x1000));
    }
}
