use std::sync::OnceLock;

use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// NonGenericTypeInfoCell

/// Lazily built, process-wide storage for the [`TypeInfo`] of one
/// non-generic type.
///
/// Intended to be placed in a `static` inside [`Typed::type_info`].
///
/// [`Typed::type_info`]: crate::info::Typed::type_info
pub struct NonGenericTypeInfoCell(OnceLock<TypeInfo>);

impl NonGenericTypeInfoCell {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored info, building it with `f` on first access.
    #[inline]
    pub fn get_or_init(&'static self, f: impl FnOnce() -> TypeInfo) -> &'static TypeInfo {
        self.0.get_or_init(f)
    }
}
