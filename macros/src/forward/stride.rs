//! Strided distance/advance forwarding.

use proc_macro2::TokenStream;
use quote::quote;

use crate::model::WrapperModel;

/// Distance and advancement are computed on the unwrapped values and
/// rewrapped.
pub fn expand_stride(model: &WrapperModel) -> TokenStream {
    let name = &model.name;
    quote! {
        impl ::rawtype::Stride for #name {
            #[inline]
            fn distance_to(&self, other: &Self) -> Self {
                Self::new(::rawtype::Stride::distance_to(&self.raw, &other.raw))
            }

            #[inline]
            fn advanced_by(&self, n: &Self) -> Self {
                Self::new(::rawtype::Stride::advanced_by(&self.raw, &n.raw))
            }
        }
    }
}
