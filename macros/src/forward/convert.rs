//! Construction and conversion forwarding.

use proc_macro2::TokenStream;
use quote::quote;

use crate::model::WrapperModel;

/// Raw-representable bridging, both directions.
pub fn expand_from(model: &WrapperModel) -> TokenStream {
    let name = &model.name;
    let raw = &model.raw;
    quote! {
        impl ::core::convert::From<#raw> for #name {
            #[inline]
            fn from(raw: #raw) -> Self {
                Self::new(raw)
            }
        }

        impl ::core::convert::From<#name> for #raw {
            #[inline]
            fn from(wrapper: #name) -> Self {
                wrapper.raw
            }
        }
    }
}

/// The wrapper's default wraps the raw default.
pub fn expand_default(model: &WrapperModel) -> TokenStream {
    let name = &model.name;
    let raw = &model.raw;
    quote! {
        impl ::core::default::Default for #name {
            #[inline]
            fn default() -> Self {
                Self::new(<#raw as ::core::default::Default>::default())
            }
        }
    }
}

/// Lossless string reconstruction. A parse failure is the raw type's own
/// error value, propagated unchanged.
pub fn expand_from_str(model: &WrapperModel) -> TokenStream {
    let name = &model.name;
    let raw = &model.raw;
    quote! {
        impl ::core::str::FromStr for #name {
            type Err = <#raw as ::core::str::FromStr>::Err;

            #[inline]
            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <#raw as ::core::str::FromStr>::from_str(s).map(Self::new)
            }
        }
    }
}
