//! Additive arithmetic forwarding.

use proc_macro2::TokenStream;
use quote::quote;

use crate::model::WrapperModel;

/// Value variants rewrap `raw op raw`; assign variants mutate the stored
/// field directly.
pub fn expand_additive(model: &WrapperModel) -> TokenStream {
    let name = &model.name;
    quote! {
        impl ::core::ops::Add for #name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self::new(self.raw + rhs.raw)
            }
        }

        impl ::core::ops::AddAssign for #name {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                self.raw += rhs.raw;
            }
        }

        impl ::core::ops::Sub for #name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self::new(self.raw - rhs.raw)
            }
        }

        impl ::core::ops::SubAssign for #name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                self.raw -= rhs.raw;
            }
        }
    }
}

/// The wrapper's zero wraps the raw zero. One unconditional rule; `Zero`
/// additionally requires the `Additive` impls.
pub fn expand_zero(model: &WrapperModel) -> TokenStream {
    let name = &model.name;
    let raw = &model.raw;
    quote! {
        impl ::rawtype::export::num_traits::Zero for #name {
            #[inline]
            fn zero() -> Self {
                Self::new(<#raw as ::rawtype::export::num_traits::Zero>::zero())
            }

            #[inline]
            fn is_zero(&self) -> bool {
                ::rawtype::export::num_traits::Zero::is_zero(&self.raw)
            }
        }
    }
}
