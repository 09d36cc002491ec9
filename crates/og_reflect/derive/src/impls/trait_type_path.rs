use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;

use crate::derive_data::ReflectStruct;

/// Generate implementation code for `TypePath` trait.
pub(crate) fn impl_trait_type_path(reflect_struct: &ReflectStruct) -> TokenStream {
    let info_ = crate::path::info_(&reflect_struct.og_reflect_path);
    let ident = reflect_struct.ident;
    let type_name = ident.unraw().to_string();
    let (type_path, module_path) = reflect_struct.type_path_tokens();

    quote! {
        impl #info_::TypePath for #ident {
            #[inline]
            fn type_path() -> &'static str {
                #type_path
            }

            #[inline]
            fn type_name() -> &'static str {
                #type_name
            }

            #[inline]
            fn module_path() -> ::core::option::Option<&'static str> {
                #module_path
            }
        }
    }
}
