//! Attribute-argument parsing for `#[newtype]`.

use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Ident, Token, Type, parenthesized};

/// Parsed `#[newtype(Raw)]` / `#[newtype(Raw, caps(...))]` arguments.
///
/// The capability entries stay as raw idents here so the expander can anchor
/// an unknown-name diagnostic to the offending token.
pub struct NewtypeArgs {
    pub raw: Type,
    pub caps: Vec<Ident>,
}

impl Parse for NewtypeArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let raw: Type = input.parse()?;

        let mut caps = Vec::new();
        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
            if !input.is_empty() {
                let kw: Ident = input.parse()?;
                if kw != "caps" {
                    return Err(syn::Error::new(
                        kw.span(),
                        "expected `caps(...)` after the raw type; \
                         exactly one raw type argument is allowed",
                    ));
                }
                let content;
                parenthesized!(content in input);
                caps = Punctuated::<Ident, Token![,]>::parse_terminated(&content)?
                    .into_iter()
                    .collect();
            }
        }

        if !input.is_empty() {
            return Err(syn::Error::new(
                input.span(),
                "unexpected tokens after `caps(...)`",
            ));
        }

        Ok(NewtypeArgs { raw, caps })
    }
}
