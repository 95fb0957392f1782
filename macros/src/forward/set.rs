//! Set-algebra forwarding.
//!
//! Every operation delegates to the identical `SetOps` operation on the
//! unwrapped raw set, rewrapping set-valued results. The array construction
//! delegates to the iterator-based construction in a single step. The
//! operator impls are sugar over the same four set-valued operations.

use proc_macro2::TokenStream;
use quote::quote;

use crate::model::WrapperModel;

pub fn expand_set(model: &WrapperModel) -> TokenStream {
    let name = &model.name;
    let raw = &model.raw;
    let item = quote!(<#raw as ::rawtype::SetOps>::Item);

    quote! {
        impl ::rawtype::SetOps for #name {
            type Item = #item;

            #[inline]
            fn empty() -> Self {
                Self::new(<#raw as ::rawtype::SetOps>::empty())
            }

            #[inline]
            fn union(&self, other: &Self) -> Self {
                Self::new(::rawtype::SetOps::union(&self.raw, &other.raw))
            }

            #[inline]
            fn intersection(&self, other: &Self) -> Self {
                Self::new(::rawtype::SetOps::intersection(&self.raw, &other.raw))
            }

            #[inline]
            fn symmetric_difference(&self, other: &Self) -> Self {
                Self::new(::rawtype::SetOps::symmetric_difference(&self.raw, &other.raw))
            }

            #[inline]
            fn difference(&self, other: &Self) -> Self {
                Self::new(::rawtype::SetOps::difference(&self.raw, &other.raw))
            }

            #[inline]
            fn contains(&self, item: &Self::Item) -> bool {
                ::rawtype::SetOps::contains(&self.raw, item)
            }

            #[inline]
            fn insert(&mut self, item: Self::Item) -> bool {
                ::rawtype::SetOps::insert(&mut self.raw, item)
            }

            #[inline]
            fn remove(&mut self, item: &Self::Item) -> bool {
                ::rawtype::SetOps::remove(&mut self.raw, item)
            }

            #[inline]
            fn replace(&mut self, item: Self::Item) -> ::core::option::Option<Self::Item> {
                ::rawtype::SetOps::replace(&mut self.raw, item)
            }

            #[inline]
            fn is_subset(&self, other: &Self) -> bool {
                ::rawtype::SetOps::is_subset(&self.raw, &other.raw)
            }

            #[inline]
            fn is_superset(&self, other: &Self) -> bool {
                ::rawtype::SetOps::is_superset(&self.raw, &other.raw)
            }

            #[inline]
            fn is_disjoint(&self, other: &Self) -> bool {
                ::rawtype::SetOps::is_disjoint(&self.raw, &other.raw)
            }

            #[inline]
            fn is_empty(&self) -> bool {
                ::rawtype::SetOps::is_empty(&self.raw)
            }

            #[inline]
            fn len(&self) -> usize {
                ::rawtype::SetOps::len(&self.raw)
            }
        }

        impl ::core::iter::FromIterator<#item> for #name {
            fn from_iter<I>(iter: I) -> Self
            where
                I: ::core::iter::IntoIterator<Item = #item>,
            {
                Self::new(<#raw as ::core::iter::FromIterator<#item>>::from_iter(iter))
            }
        }

        impl<const N: usize> ::core::convert::From<[#item; N]> for #name {
            fn from(items: [#item; N]) -> Self {
                <Self as ::core::iter::FromIterator<#item>>::from_iter(items)
            }
        }

        impl<'a, 'b> ::core::ops::BitOr<&'b #name> for &'a #name {
            type Output = #name;

            fn bitor(self, rhs: &'b #name) -> #name {
                #name::new(::rawtype::SetOps::union(&self.raw, &rhs.raw))
            }
        }

        impl<'a, 'b> ::core::ops::BitAnd<&'b #name> for &'a #name {
            type Output = #name;

            fn bitand(self, rhs: &'b #name) -> #name {
                #name::new(::rawtype::SetOps::intersection(&self.raw, &rhs.raw))
            }
        }

        impl<'a, 'b> ::core::ops::BitXor<&'b #name> for &'a #name {
            type Output = #name;

            fn bitxor(self, rhs: &'b #name) -> #name {
                #name::new(::rawtype::SetOps::symmetric_difference(&self.raw, &rhs.raw))
            }
        }

        impl<'a, 'b> ::core::ops::Sub<&'b #name> for &'a #name {
            type Output = #name;

            fn sub(self, rhs: &'b #name) -> #name {
                #name::new(::rawtype::SetOps::difference(&self.raw, &rhs.raw))
            }
        }
    }
}
