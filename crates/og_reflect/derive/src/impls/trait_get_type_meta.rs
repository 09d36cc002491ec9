use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generate implementation code for `GetTypeMeta` trait.
///
/// Dependencies are the types held by reflected members.
pub(crate) fn impl_trait_get_type_meta(reflect_struct: &ReflectStruct) -> TokenStream {
    let og_reflect_path = &reflect_struct.og_reflect_path;
    let registry_ = crate::path::registry_(og_reflect_path);
    let member_ = crate::path::member_(og_reflect_path);
    let ident = reflect_struct.ident;

    let register_deps = if reflect_struct.fields.is_empty() {
        TokenStream::new()
    } else {
        let deps = reflect_struct.fields.iter().map(|field| {
            let ty = field.ty;
            quote! { <#ty as #member_>::register_type(registry); }
        });
        quote! {
            fn register_dependencies(registry: &mut #registry_::TypeRegistry) {
                #(#deps)*
            }
        }
    };

    quote! {
        impl #registry_::GetTypeMeta for #ident {
            #[inline]
            fn get_type_meta() -> #registry_::TypeMeta {
                #registry_::TypeMeta::of_object::<Self>()
            }

            #register_deps
        }
    }
}
