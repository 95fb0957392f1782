//! The declaration expander.
//!
//! Consumes one annotated struct declaration plus the attribute's raw-type
//! argument, and splices out the wrapper's storage, constructor, marker impl,
//! and the forwarding impls selected by `caps(...)`. Validation is ordered
//! and fails fast: the first diagnostic aborts expansion with no partial
//! output. Identical input always yields identical output; nothing here
//! reads shared state.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::spanned::Spanned;

use crate::args::NewtypeArgs;
use crate::diagnostics::{Diagnostic, DiagnosticId};
use crate::model::{Cap, WrapperModel};

/// Expand, or render the first diagnostic as a compile error.
pub fn expand_newtype(attr: TokenStream, item: TokenStream) -> TokenStream {
    match try_expand(attr, item) {
        Ok(out) => out,
        Err(diag) => diag.to_compile_error(),
    }
}

/// Ordered validation, then member synthesis.
pub fn try_expand(attr: TokenStream, item: TokenStream) -> Result<TokenStream, Diagnostic> {
    let args = parse_args(attr)?;
    let decl = check_shape(item)?;
    let caps = resolve_caps(&args.caps)?;

    let model = WrapperModel {
        name: decl.ident.clone(),
        vis: decl.vis.clone(),
        raw: args.raw,
    };

    let mut out = expand_members(&decl, &model);
    for cap in caps {
        out.extend(cap.expand(&model));
    }
    Ok(out)
}

/// Validation step 1: the annotation must carry exactly one raw type.
fn parse_args(attr: TokenStream) -> Result<NewtypeArgs, Diagnostic> {
    if attr.is_empty() {
        return Err(Diagnostic::error(
            DiagnosticId::MissingRawType,
            Span::call_site(),
            "missing raw type argument; write #[newtype(RawType)]",
        ));
    }
    syn::parse2::<NewtypeArgs>(attr)
        .map_err(|err| Diagnostic::error(DiagnosticId::MissingRawType, err.span(), err.to_string()))
}

/// Validation step 2: only a fieldless, non-generic struct can be a newtype.
/// The diagnostic anchors to the item's introducing keyword.
fn check_shape(item: TokenStream) -> Result<syn::ItemStruct, Diagnostic> {
    let not_struct = |span: Span| {
        Diagnostic::error(
            DiagnosticId::NotStruct,
            span,
            "only a fieldless struct can be a newtype",
        )
    };

    let item: syn::Item =
        syn::parse2(item).map_err(|err| not_struct(err.span()))?;

    match item {
        syn::Item::Struct(decl) => {
            let fieldless = match &decl.fields {
                syn::Fields::Unit => true,
                syn::Fields::Named(fields) => fields.named.is_empty(),
                syn::Fields::Unnamed(fields) => fields.unnamed.is_empty(),
            };
            if !fieldless {
                return Err(not_struct(decl.struct_token.span));
            }
            if !decl.generics.params.is_empty() {
                return Err(Diagnostic::error(
                    DiagnosticId::NotStruct,
                    decl.generics.span(),
                    "a newtype cannot take generic parameters",
                ));
            }
            Ok(decl)
        }
        syn::Item::Enum(decl) => Err(not_struct(decl.enum_token.span)),
        syn::Item::Union(decl) => Err(not_struct(decl.union_token.span)),
        other => Err(not_struct(other.span())),
    }
}

/// Resolve `caps(...)` entries against the catalog.
fn resolve_caps(idents: &[syn::Ident]) -> Result<Vec<Cap>, Diagnostic> {
    let mut caps = Vec::with_capacity(idents.len());
    for ident in idents {
        let cap = Cap::from_ident(ident).ok_or_else(|| {
            Diagnostic::error(
                DiagnosticId::UnknownCap,
                ident.span(),
                format!("unknown capability `{ident}`"),
            )
        })?;
        if caps.contains(&cap) {
            return Err(Diagnostic::error(
                DiagnosticId::DuplicateCap,
                ident.span(),
                format!("capability `{ident}` listed twice"),
            ));
        }
        caps.push(cap);
    }
    Ok(caps)
}

/// Member synthesis: stored field, constructor, marker impl. The struct's
/// own visibility is mirrored onto the field and the constructor.
fn expand_members(decl: &syn::ItemStruct, model: &WrapperModel) -> TokenStream {
    let attrs = &decl.attrs;
    let WrapperModel { name, vis, raw } = model;

    quote! {
        #(#attrs)*
        #vis struct #name {
            #vis raw: #raw,
        }

        impl #name {
            /// Wrap a raw value.
            #[inline]
            #vis const fn new(raw: #raw) -> Self {
                Self { raw }
            }
        }

        impl ::rawtype::NewType for #name {
            type Raw = #raw;

            #[inline]
            fn from_raw(raw: #raw) -> Self {
                Self { raw }
            }

            #[inline]
            fn raw(&self) -> &#raw {
                &self.raw
            }

            #[inline]
            fn raw_mut(&mut self) -> &mut #raw {
                &mut self.raw
            }

            #[inline]
            fn into_raw(self) -> #raw {
                self.raw
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    fn members_for(vis: TokenStream, name: &str) -> TokenStream {
        let name = syn::Ident::new(name, Span::call_site());
        quote! {
            #vis struct #name {
                #vis raw: u64,
            }

            impl #name {
                /// Wrap a raw value.
                #[inline]
                #vis const fn new(raw: u64) -> Self {
                    Self { raw }
                }
            }

            impl ::rawtype::NewType for #name {
                type Raw = u64;

                #[inline]
                fn from_raw(raw: u64) -> Self {
                    Self { raw }
                }

                #[inline]
                fn raw(&self) -> &u64 {
                    &self.raw
                }

                #[inline]
                fn raw_mut(&mut self) -> &mut u64 {
                    &mut self.raw
                }

                #[inline]
                fn into_raw(self) -> u64 {
                    self.raw
                }
            }
        }
    }

    #[test]
    fn simple_u64_wrapper() {
        let output = expand_newtype(quote!(u64), quote!(struct MyInt;));
        assert_eq!(output.to_string(), members_for(quote!(), "MyInt").to_string());
    }

    #[test]
    fn empty_braces_accepted() {
        let output = expand_newtype(quote!(u64), quote!(struct MyInt {}));
        assert_eq!(output.to_string(), members_for(quote!(), "MyInt").to_string());
    }

    #[test]
    fn public_visibility_copied() {
        let output = expand_newtype(quote!(u64), quote!(pub struct MyInt;));
        assert_eq!(output.to_string(), members_for(quote!(pub), "MyInt").to_string());
    }

    #[test]
    fn crate_visibility_copied() {
        let output = expand_newtype(quote!(u64), quote!(pub(crate) struct MyInt;));
        assert_eq!(
            output.to_string(),
            members_for(quote!(pub(crate)), "MyInt").to_string()
        );
    }

    #[test]
    fn expansion_is_deterministic() {
        let a = expand_newtype(
            quote!(u64, caps(Eq, Ord, Hash, Display, Additive)),
            quote!(pub struct RowIndex;),
        );
        let b = expand_newtype(
            quote!(u64, caps(Eq, Ord, Hash, Display, Additive)),
            quote!(pub struct RowIndex;),
        );
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn hash_cap_appends_forwarding_impl() {
        let output = expand_newtype(quote!(u64, caps(Hash)), quote!(struct MyInt;));
        let mut expected = members_for(quote!(), "MyInt");
        expected.extend(quote! {
            impl ::core::hash::Hash for MyInt {
                #[inline]
                fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                    ::core::hash::Hash::hash(&self.raw, state);
                }
            }
        });
        assert_eq!(output.to_string(), expected.to_string());
    }

    #[test]
    fn missing_raw_type_rejected() {
        let err = try_expand(quote!(), quote!(struct MyInt;)).unwrap_err();
        assert_eq!(err.id, DiagnosticId::MissingRawType);
        assert_eq!(err.severity, crate::diagnostics::Severity::Error);
        assert!(err.message.contains("missing raw type"));
    }

    #[test]
    fn two_raw_types_rejected() {
        let err = try_expand(quote!(u32, u64), quote!(struct MyInt;)).unwrap_err();
        assert_eq!(err.id, DiagnosticId::MissingRawType);
    }

    #[test]
    fn enum_rejected() {
        let err = try_expand(quote!(u64), quote!(enum MyInt { A })).unwrap_err();
        assert_eq!(err.id, DiagnosticId::NotStruct);
        assert!(err.message.contains("only a fieldless struct"));
    }

    #[test]
    fn struct_with_fields_rejected() {
        let err = try_expand(quote!(u64), quote!(struct MyInt { x: u8 })).unwrap_err();
        assert_eq!(err.id, DiagnosticId::NotStruct);

        let err = try_expand(quote!(u64), quote!(struct MyInt(u8);)).unwrap_err();
        assert_eq!(err.id, DiagnosticId::NotStruct);
    }

    #[test]
    fn rejection_emits_no_members() {
        let output = expand_newtype(quote!(u64), quote!(enum MyInt { A }));
        let rendered = output.to_string();
        assert!(rendered.contains("compile_error"));
        assert!(!rendered.contains("impl"));
    }

    #[test]
    fn unknown_cap_rejected() {
        let err = try_expand(quote!(u64, caps(Frobnicate)), quote!(struct MyInt;)).unwrap_err();
        assert_eq!(err.id, DiagnosticId::UnknownCap);
        assert!(err.message.contains("Frobnicate"));
    }

    #[test]
    fn duplicate_cap_rejected() {
        let err = try_expand(quote!(u64, caps(Eq, Eq)), quote!(struct MyInt;)).unwrap_err();
        assert_eq!(err.id, DiagnosticId::DuplicateCap);
    }
}
