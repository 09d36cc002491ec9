//! Parse `#[reflect(...)]` attributes.

use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Attribute, LitStr};

use crate::REFLECT_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// TypeAttributes

/// Attributes placed on the struct itself.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// `#[reflect(type_path = "...")]`
    pub type_path: Option<LitStr>,
    /// `#[reflect(auto_register)]`
    #[cfg_attr(not(feature = "auto_register"), allow(dead_code))]
    pub auto_register: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("type_path") {
                    let lit: LitStr = meta.value()?.parse()?;
                    validate_type_path(&lit)?;
                    if result.type_path.replace(lit).is_some() {
                        return Err(meta.error("duplicate `type_path`"));
                    }
                    Ok(())
                } else if meta.path.is_ident("auto_register") {
                    result.auto_register = Some(meta.path.span());
                    Ok(())
                } else {
                    Err(meta.error("expected `type_path = \"...\"` or `auto_register`"))
                }
            })?;
        }

        Ok(result)
    }
}

fn validate_type_path(lit: &LitStr) -> syn::Result<()> {
    let path = lit.value();
    if path.is_empty() || path.starts_with("::") || path.ends_with("::") {
        return Err(syn::Error::new(
            lit.span(),
            "`type_path` must be a non-empty path without leading or trailing `::`",
        ));
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// How a struct member is exposed.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MemberKind {
    #[default]
    Field,
    Property {
        readonly: bool,
    },
    Ignored,
}

/// Attributes placed on a struct member.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    pub kind: MemberKind,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut property = None;
        let mut readonly = None;
        let mut ignore = None;

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                let span = meta.path.span();
                if meta.path.is_ident("property") {
                    property = Some(span);
                } else if meta.path.is_ident("readonly") {
                    readonly = Some(span);
                } else if meta.path.is_ident("ignore") {
                    ignore = Some(span);
                } else {
                    return Err(meta.error("expected `property`, `readonly` or `ignore`"));
                }
                Ok(())
            })?;
        }

        let kind = match (ignore, property, readonly) {
            (Some(_), None, None) => MemberKind::Ignored,
            (Some(span), _, _) => {
                return Err(syn::Error::new(
                    span,
                    "`ignore` cannot be combined with other attributes",
                ));
            }
            (None, Some(_), readonly) => MemberKind::Property {
                readonly: readonly.is_some(),
            },
            (None, None, Some(span)) => {
                return Err(syn::Error::new(span, "`readonly` requires `property`"));
            }
            (None, None, None) => MemberKind::Field,
        };

        Ok(Self { kind })
    }
}
