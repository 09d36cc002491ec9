//! Paths into `og_reflect` used by the generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Get the correct access path to the `og_reflect` crate.
///
/// 1. For crates that depend on `og_reflect`, `::og_reflect` is returned.
/// 2. For crates that depend on `objgraph`, `::objgraph::reflect` is returned.
/// 3. Otherwise `::og_reflect` is returned, which may be incorrect.
///
/// Reads the caller's manifest, so call it once per expansion.
pub(crate) fn og_reflect() -> syn::Path {
    og_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("og_reflect"))
}

#[inline(always)]
pub(crate) fn info_(og_reflect_path: &syn::Path) -> TokenStream {
    quote! { #og_reflect_path::info }
}

#[inline(always)]
pub(crate) fn registry_(og_reflect_path: &syn::Path) -> TokenStream {
    quote! { #og_reflect_path::registry }
}

#[inline(always)]
pub(crate) fn reflect_(og_reflect_path: &syn::Path) -> TokenStream {
    quote! { #og_reflect_path::Reflect }
}

#[inline(always)]
pub(crate) fn member_(og_reflect_path: &syn::Path) -> TokenStream {
    quote! { #og_reflect_path::Member }
}

#[inline(always)]
pub(crate) fn value_(og_reflect_path: &syn::Path) -> TokenStream {
    quote! { #og_reflect_path::Value }
}

#[inline(always)]
pub(crate) fn reflect_error_(og_reflect_path: &syn::Path) -> TokenStream {
    quote! { #og_reflect_path::ReflectError }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(og_reflect_path: &syn::Path) -> TokenStream {
    quote! { #og_reflect_path::__macro_exports::auto_register }
}
