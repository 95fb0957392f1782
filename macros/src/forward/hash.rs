//! Hashing forwarding.

use proc_macro2::TokenStream;
use quote::quote;

use crate::model::WrapperModel;

/// The raw value feeds the hasher directly: the wrapper's hash is exactly
/// the raw value's hash.
pub fn expand_hash(model: &WrapperModel) -> TokenStream {
    let name = &model.name;
    quote! {
        impl ::core::hash::Hash for #name {
            #[inline]
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash(&self.raw, state);
            }
        }
    }
}
