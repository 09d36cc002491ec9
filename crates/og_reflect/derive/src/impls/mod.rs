//! Code generation for `#[derive(Reflect)]`.

// -----------------------------------------------------------------------------
// Modules

mod auto_register;
mod trait_get_type_meta;
mod trait_reflect;
mod trait_type_path;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

#[cfg(feature = "auto_register")]
pub(crate) use auto_register::auto_register_tokens;

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generate every implementation for a struct.
pub(crate) fn impl_struct(reflect_struct: &ReflectStruct) -> TokenStream {
    let type_path_impl = trait_type_path::impl_trait_type_path(reflect_struct);
    let typed_impl = trait_typed::impl_trait_typed(reflect_struct);
    let reflect_impl = trait_reflect::impl_trait_reflect(reflect_struct);
    let get_type_meta_impl = trait_get_type_meta::impl_trait_get_type_meta(reflect_struct);
    let auto_register_impl = auto_register::get_auto_register_impl(reflect_struct);

    quote! {
        const _: () = {
            #type_path_impl

            #typed_impl

            #reflect_impl

            #get_type_meta_impl

            #auto_register_impl
        };
    }
}
