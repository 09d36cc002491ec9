use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generate implementation code for `Typed` trait.
///
/// The `ObjectInfo` is built once, on first access.
pub(crate) fn impl_trait_typed(reflect_struct: &ReflectStruct) -> TokenStream {
    let info_ = crate::path::info_(&reflect_struct.og_reflect_path);
    let ident = reflect_struct.ident;

    let fields = reflect_struct.plain_fields().map(|field| {
        let ty = field.ty;
        let name = &field.name;
        quote! { #info_::FieldInfo::new::<#ty>(#name) }
    });

    let properties = reflect_struct.properties().map(|(field, readonly)| {
        let ty = field.ty;
        let name = &field.name;
        if readonly {
            quote! { #info_::PropertyInfo::new::<#ty>(#name).readonly() }
        } else {
            quote! { #info_::PropertyInfo::new::<#ty>(#name) }
        }
    });

    let visibility = if reflect_struct.is_public {
        quote! { #info_::Visibility::Public }
    } else {
        quote! { #info_::Visibility::Restricted }
    };

    quote! {
        impl #info_::Typed for #ident {
            fn type_info() -> &'static #info_::TypeInfo {
                static CELL: #info_::NonGenericTypeInfoCell = #info_::NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    #info_::TypeInfo::Object(
                        #info_::ObjectInfo::new::<Self>(
                            &[#(#fields),*],
                            &[#(#properties),*],
                        )
                        .with_visibility(#visibility),
                    )
                })
            }
        }
    }
}
