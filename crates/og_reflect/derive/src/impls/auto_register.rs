use proc_macro2::TokenStream;

use crate::derive_data::ReflectStruct;

/// Generate `auto_register` implementation
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(reflect_struct: &ReflectStruct) -> TokenStream {
    if reflect_struct.attrs.auto_register.is_none() {
        return TokenStream::new();
    }

    let ident = reflect_struct.ident;
    auto_register_tokens(&reflect_struct.og_reflect_path, &syn::parse_quote!(#ident))
}

/// Generate `auto_register` implementation
#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &ReflectStruct) -> TokenStream {
    TokenStream::new()
}

/// Submit `ty` to the `inventory` of registration functions.
#[cfg(feature = "auto_register")]
pub(crate) fn auto_register_tokens(og_reflect_path: &syn::Path, ty: &syn::Type) -> TokenStream {
    let auto_register_ = crate::path::auto_register_(og_reflect_path);

    quote::quote! {
        #auto_register_::inventory::submit!{
            #auto_register_::__AutoRegisterFunc(
                <#ty as #auto_register_::__RegisterType>::__register
            )
        }
    }
}
