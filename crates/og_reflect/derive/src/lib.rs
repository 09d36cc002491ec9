//! See following macros:
//!
//! - [`Reflect`]
//! - [`impl_auto_register`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits for a struct with
/// named fields:
///
/// - `TypePath`
/// - `Typed`
/// - `Reflect`
/// - `GetTypeMeta`
///
/// The type must also implement [`Default`], which is how a registry creates
/// a fresh instance before filling in its members. Generic structs, tuple
/// structs, unit structs, enums and unions are rejected.
///
/// Every member type must implement `Member`: primitives, `String`,
/// `Shared<T>` of another reflected type, or `Option` of any of those.
///
/// ## Visibility
///
/// A `pub` struct is `Visibility::Public`, anything else is
/// `Visibility::Restricted` and is refused by serializers.
///
/// ## Type Attributes
///
/// ### Custom Type Path
///
/// The type path defaults to `module_path!()` followed by the type name.
/// Override it to keep documents readable after moving the type:
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// #[reflect(type_path = "people::Person")]
/// pub struct Person { /* ... */ }
/// ```
///
/// ### Auto Register
///
/// With the `auto_register` feature, the type is submitted for
/// `TypeRegistry::register_auto`:
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// #[reflect(auto_register)]
/// pub struct Person { /* ... */ }
/// ```
///
/// ## Field Attributes
///
/// - `#[reflect(property)]`: expose the member as an auto property rather
///   than a field.
/// - `#[reflect(property, readonly)]`: a property without a setter. Its value
///   can be read, but serializers skip it and assignments fail.
/// - `#[reflect(ignore)]`: hide the member from reflection. Deserialized
///   instances keep its `Default` value.
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// pub struct Person {
///     pub name: String,
///     #[reflect(property)]
///     pub age: u8,
///     #[reflect(property, readonly)]
///     pub id: u64,
///     #[reflect(ignore)]
///     cache: Vec<u8>,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::ReflectStruct::from_ast(&ast) {
        Ok(reflect_struct) => impls::impl_struct(&reflect_struct).into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Submit a type for `TypeRegistry::register_auto`.
///
/// For types whose `Reflect` implementation is written by hand.
/// Does nothing without the `auto_register` feature.
///
/// ```rust, ignore
/// impl_auto_register!(my_crate::Celsius);
/// ```
#[proc_macro]
pub fn impl_auto_register(_input: TokenStream) -> TokenStream {
    #[cfg(not(feature = "auto_register"))]
    return TokenStream::new();

    #[cfg(feature = "auto_register")]
    {
        let ty = parse_macro_input!(_input as syn::Type);
        let og_reflect_path = path::og_reflect();

        let submit = impls::auto_register_tokens(&og_reflect_path, &ty);

        TokenStream::from(quote::quote! {
            const _: () = {
                #submit
            };
        })
    }
}
