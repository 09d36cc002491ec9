//! Items used by code generated from `og_reflect_derive`. Not public API.

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::registry::{GetTypeMeta, TypeRegistry};

    /// A registration function submitted through [`inventory`].
    pub struct __AutoRegisterFunc(pub fn(&mut TypeRegistry));

    inventory::collect!(__AutoRegisterFunc);

    /// Turns a type into a `fn` pointer usable by [`__AutoRegisterFunc`].
    pub trait __RegisterType {
        fn __register(registry: &mut TypeRegistry);
    }

    impl<T: GetTypeMeta> __RegisterType for T {
        #[inline]
        fn __register(registry: &mut TypeRegistry) {
            registry.register::<T>();
        }
    }

    /// Runs every submitted registration function.
    pub fn __register_types(registry: &mut TypeRegistry) -> usize {
        let mut count = 0;
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(registry);
            count += 1;
        }
        log::trace!("auto registered {count} types");
        count
    }
}
