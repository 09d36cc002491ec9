use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{ReflectStruct, StructField};

/// Generate implementation code for `Reflect` trait.
///
/// Getters and setters dispatch on the member name; a setter converts the
/// value through `Member::from_value` before touching the struct.
pub(crate) fn impl_trait_reflect(reflect_struct: &ReflectStruct) -> TokenStream {
    let reflect_ = crate::path::reflect_(&reflect_struct.og_reflect_path);
    let ident = reflect_struct.ident;

    let fields: Vec<_> = reflect_struct.plain_fields().map(|f| (f, false)).collect();
    let field_getter = getter(reflect_struct, quote!(field), &fields);
    let field_setter = setter(reflect_struct, quote!(set_field), &fields);

    let properties: Vec<_> = reflect_struct.properties().collect();
    let property_accessors = if properties.is_empty() {
        TokenStream::new()
    } else {
        let getter = getter(reflect_struct, quote!(property), &properties);
        let setter = setter(reflect_struct, quote!(set_property), &properties);
        quote! {
            #getter
            #setter
        }
    };

    quote! {
        impl #reflect_ for #ident {
            #field_getter
            #field_setter
            #property_accessors
        }
    }
}

fn getter(
    reflect_struct: &ReflectStruct,
    method: TokenStream,
    members: &[(&StructField, bool)],
) -> TokenStream {
    let og_reflect_path = &reflect_struct.og_reflect_path;
    let member_ = crate::path::member_(og_reflect_path);
    let value_ = crate::path::value_(og_reflect_path);

    let arms = members.iter().map(|(field, _)| {
        let name = &field.name;
        let ident = field.ident;
        quote! {
            #name => ::core::option::Option::Some(#member_::to_value(&self.#ident)),
        }
    });

    quote! {
        fn #method(&self, name: &str) -> ::core::option::Option<#value_> {
            match name {
                #(#arms)*
                _ => ::core::option::Option::None,
            }
        }
    }
}

fn setter(
    reflect_struct: &ReflectStruct,
    method: TokenStream,
    members: &[(&StructField, bool)],
) -> TokenStream {
    let og_reflect_path = &reflect_struct.og_reflect_path;
    let member_ = crate::path::member_(og_reflect_path);
    let value_ = crate::path::value_(og_reflect_path);
    let reflect_error_ = crate::path::reflect_error_(og_reflect_path);

    let uses_value = members.iter().any(|(_, readonly)| !readonly);
    let value_param = if uses_value {
        quote!(value)
    } else {
        quote!(_)
    };

    let arms = members.iter().map(|(field, readonly)| {
        let name = &field.name;
        let ident = field.ident;
        let ty = field.ty;
        if *readonly {
            quote! {
                #name => ::core::result::Result::Err(#reflect_error_::read_only::<Self>(name)),
            }
        } else {
            quote! {
                #name => {
                    self.#ident = <#ty as #member_>::from_value(value)?;
                    ::core::result::Result::Ok(())
                }
            }
        }
    });

    quote! {
        fn #method(
            &mut self,
            name: &str,
            #value_param: #value_,
        ) -> ::core::result::Result<(), #reflect_error_> {
            match name {
                #(#arms)*
                _ => ::core::result::Result::Err(#reflect_error_::missing_member::<Self>(name)),
            }
        }
    }
}
