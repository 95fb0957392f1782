//! Encode/decode forwarding.
//!
//! The wrapper serializes as its raw value with no envelope, so the encoded
//! form of `wrap(a)` is identical to the encoded form of `a`.

use proc_macro2::TokenStream;
use quote::quote;

use crate::model::WrapperModel;

pub fn expand_serialize(model: &WrapperModel) -> TokenStream {
    let name = &model.name;
    quote! {
        impl ::rawtype::export::serde::Serialize for #name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::rawtype::export::serde::Serializer,
            {
                ::rawtype::export::serde::Serialize::serialize(&self.raw, serializer)
            }
        }
    }
}

pub fn expand_deserialize(model: &WrapperModel) -> TokenStream {
    let name = &model.name;
    let raw = &model.raw;
    quote! {
        impl<'de> ::rawtype::export::serde::Deserialize<'de> for #name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::rawtype::export::serde::Deserializer<'de>,
            {
                <#raw as ::rawtype::export::serde::Deserialize<'de>>::deserialize(deserializer)
                    .map(Self::new)
            }
        }
    }
}
