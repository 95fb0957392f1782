//! The marker contract every generated wrapper satisfies.

/// Implemented by `#[newtype]` for the annotated struct.
///
/// `Raw` is the canonical name of the wrapped value type; the remaining
/// operations are the wrap/unwrap primitives the forwarding catalog is built
/// from. The generated impl stores and returns the raw value directly — no
/// validation, no transformation.
pub trait NewType: Sized {
    /// The wrapped value type.
    type Raw;

    /// Wrap a raw value.
    fn from_raw(raw: Self::Raw) -> Self;

    /// Borrow the stored raw value.
    fn raw(&self) -> &Self::Raw;

    /// Mutably borrow the stored raw value.
    fn raw_mut(&mut self) -> &mut Self::Raw;

    /// Unwrap into the stored raw value.
    fn into_raw(self) -> Self::Raw;

    /// Unwrap, transform, rewrap.
    #[inline]
    fn map(self, f: impl FnOnce(Self::Raw) -> Self::Raw) -> Self {
        Self::from_raw(f(self.into_raw()))
    }
}
