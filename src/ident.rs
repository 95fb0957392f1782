//! Identity capability.

/// A value with a stable identity.
///
/// The `Id` cap forwards this trait: the wrapper's id is the raw value's id,
/// unchanged. Raw types opt in by implementing it themselves.
pub trait Identified {
    /// The identity type.
    type Id;

    /// The value's identity.
    fn id(&self) -> Self::Id;
}
