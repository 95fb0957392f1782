//! Identity forwarding: the wrapper's id is the raw value's id, unchanged.

use proc_macro2::TokenStream;
use quote::quote;

use crate::model::WrapperModel;

pub fn expand_id(model: &WrapperModel) -> TokenStream {
    let name = &model.name;
    let raw = &model.raw;
    quote! {
        impl ::rawtype::Identified for #name {
            type Id = <#raw as ::rawtype::Identified>::Id;

            #[inline]
            fn id(&self) -> Self::Id {
                ::rawtype::Identified::id(&self.raw)
            }
        }
    }
}
