//! Strided distance/advance capability.

/// Linear stride operations forwarded by the `Stride` cap.
///
/// Only types whose stride is measured in the type itself implement this —
/// signed integers and floats. Unsigned integers measure distance in a signed
/// type and stay out of the catalog.
pub trait Stride {
    /// The stride from `self` up (or down) to `other`.
    fn distance_to(&self, other: &Self) -> Self;

    /// The value `n` strides away from `self`.
    fn advanced_by(&self, n: &Self) -> Self;
}

macro_rules! impl_stride {
    ($($ty:ty),* $(,)?) => {$(
        impl Stride for $ty {
            #[inline]
            fn distance_to(&self, other: &Self) -> Self {
                other - self
            }

            #[inline]
            fn advanced_by(&self, n: &Self) -> Self {
                self + n
            }
        }
    )*};
}

impl_stride!(i8, i16, i32, i64, i128, isize, f32, f64);
