//! Equality and ordering forwarding.

use proc_macro2::TokenStream;
use quote::quote;

use crate::model::WrapperModel;

/// Two wrappers are equal when their raw values are.
pub fn expand_eq(model: &WrapperModel) -> TokenStream {
    let name = &model.name;
    quote! {
        impl ::core::cmp::PartialEq for #name {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                self.raw == other.raw
            }
        }

        impl ::core::cmp::Eq for #name {}
    }
}

/// Comparison on the unwrapped raw values.
pub fn expand_ord(model: &WrapperModel) -> TokenStream {
    let name = &model.name;
    quote! {
        impl ::core::cmp::PartialOrd for #name {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                self.raw.partial_cmp(&other.raw)
            }
        }

        impl ::core::cmp::Ord for #name {
            #[inline]
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                self.raw.cmp(&other.raw)
            }
        }
    }
}
