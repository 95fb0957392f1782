//! Textual description forwarding. No wrapper envelope in either direction.

use proc_macro2::TokenStream;
use quote::quote;

use crate::model::WrapperModel;

pub fn expand_display(model: &WrapperModel) -> TokenStream {
    let name = &model.name;
    quote! {
        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.raw, f)
            }
        }
    }
}

pub fn expand_debug(model: &WrapperModel) -> TokenStream {
    let name = &model.name;
    quote! {
        impl ::core::fmt::Debug for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(&self.raw, f)
            }
        }
    }
}
