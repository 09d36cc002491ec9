use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Ident, Type, Visibility};

use super::{FieldAttributes, MemberKind, TypeAttributes};

// -----------------------------------------------------------------------------
// StructField

/// A reflected member of the struct.
pub(crate) struct StructField<'a> {
    /// The field identifier, used for access.
    pub ident: &'a Ident,
    /// The member name seen by reflection (identifier without `r#`).
    pub name: String,
    pub ty: &'a Type,
    pub attrs: FieldAttributes,
}

// -----------------------------------------------------------------------------
// ReflectStruct

/// A parsed `#[derive(Reflect)]` input.
pub(crate) struct ReflectStruct<'a> {
    pub og_reflect_path: syn::Path,
    pub ident: &'a Ident,
    pub is_public: bool,
    pub attrs: TypeAttributes,
    pub fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn from_ast(ast: &'a DeriveInput) -> syn::Result<Self> {
        if !ast.generics.params.is_empty() || ast.generics.where_clause.is_some() {
            return Err(syn::Error::new(
                ast.generics.span(),
                "`Reflect` cannot be derived for generic types",
            ));
        }

        let named = match &ast.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named,
                _ => {
                    return Err(syn::Error::new(
                        ast.ident.span(),
                        "`Reflect` can only be derived for structs with named fields",
                    ));
                }
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "`Reflect` cannot be derived for enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "`Reflect` cannot be derived for unions",
                ));
            }
        };

        let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;

        let mut fields = Vec::with_capacity(named.named.len());
        for field in &named.named {
            let attrs = FieldAttributes::parse_attrs(&field.attrs)?;
            if attrs.kind == MemberKind::Ignored {
                continue;
            }
            // Named fields always carry an identifier.
            let Some(ident) = &field.ident else { continue };
            fields.push(StructField {
                ident,
                name: ident.unraw().to_string(),
                ty: &field.ty,
                attrs,
            });
        }

        Ok(Self {
            og_reflect_path: crate::path::og_reflect(),
            ident: &ast.ident,
            is_public: matches!(ast.vis, Visibility::Public(_)),
            attrs,
            fields,
        })
    }

    /// Members exposed as fields, in declaration order.
    pub fn plain_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields
            .iter()
            .filter(|f| f.attrs.kind == MemberKind::Field)
    }

    /// Members exposed as properties, in declaration order, with their
    /// `readonly` flag.
    pub fn properties(&self) -> impl Iterator<Item = (&StructField<'a>, bool)> {
        self.fields.iter().filter_map(|f| match f.attrs.kind {
            MemberKind::Property { readonly } => Some((f, readonly)),
            _ => None,
        })
    }

    /// The type path literal and the module path, honoring `type_path = "..."`.
    pub fn type_path_tokens(&self) -> (proc_macro2::TokenStream, proc_macro2::TokenStream) {
        use quote::quote;

        match &self.attrs.type_path {
            Some(lit) => {
                let path = lit.value();
                let module = match path.rsplit_once("::") {
                    Some((module, _)) => quote! { ::core::option::Option::Some(#module) },
                    None => quote! { ::core::option::Option::None },
                };
                (quote! { #lit }, module)
            }
            None => {
                let name = self.ident.unraw().to_string();
                (
                    quote! { ::core::concat!(::core::module_path!(), "::", #name) },
                    quote! { ::core::option::Option::Some(::core::module_path!()) },
                )
            }
        }
    }
}
