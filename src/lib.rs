#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library (HashSet forwarding)
// - alloc: enables alloc types in no_std (BTreeSet forwarding)
// - serde: enables Serialize/Deserialize capabilities

//! # rawtype
//!
//! Newtype code generator with capability forwarding.
//!
//! **Compile-time wrapper synthesis for Rust.**
//!
//! ## Architecture
//!
//! `rawtype` turns a fieldless struct into a newtype over a raw value type
//! and forwards the raw type's capabilities to the wrapper.
//!
//! ### 1. Expansion
//! The `#[newtype]` attribute rewrites the declaration once, at the point it
//! is processed:
//!
//! ```text
//! #[newtype(u64, caps(..))] struct Id;
//!     -> struct Id { raw: u64 }         (stored field)
//!     -> impl Id { const fn new(u64) }  (constructor)
//!     -> impl NewType for Id            (marker, Raw = u64)
//!     -> one impl per requested cap     (forwarding catalog)
//! ```
//!
//! ### 2. Forwarding
//! Every capability impl is pure delegation: unwrap, apply the raw type's
//! own operation, rewrap any raw-valued result. Nothing is resolved at
//! runtime; each call site binds directly to the generated impl.
//!
//! ### 3. Catalog
//!
//! | Cap | Forwards |
//! |-----|----------|
//! | `Eq` | `PartialEq`, `Eq` |
//! | `Ord` | `PartialOrd`, `Ord` |
//! | `Hash` | `Hash` |
//! | `Display`, `Debug` | `core::fmt` (no wrapper envelope) |
//! | `Additive` | `Add`, `AddAssign`, `Sub`, `SubAssign` |
//! | `Zero` | `num_traits::Zero` (needs `Additive`) |
//! | `Default` | `Default` |
//! | `From` | `From<Raw>` and `From<Self> for Raw` |
//! | `FromStr` | `FromStr`, `Err = Raw::Err` |
//! | `Serialize`, `Deserialize` | serde, transparent over the raw value |
//! | `Id` | [`Identified`] |
//! | `Set` | [`SetOps`], `FromIterator`, `From<[Item; N]>`, and the set operators on references |
//! | `Stride` | [`Stride`] |
//!
//! ## Quick Start
//!
//! ```
//! use rawtype::newtype;
//!
//! #[newtype(u64, caps(Eq, Ord, Hash, Display, Additive))]
//! pub struct RowIndex;
//!
//! let a = RowIndex::new(3);
//! let b = RowIndex::new(4);
//! assert!(a < b);
//! assert_eq!(a.to_string(), "3");
//! assert_eq!((a + b).raw, 7);
//! ```
//!
//! A wrapper only gains the capabilities it asks for, and only when the raw
//! type has them; an unmet requirement is an ordinary trait-bound compile
//! error at the generated impl, never a runtime failure.
//!
//! ## Rejected shapes
//!
//! The raw type argument is mandatory:
//!
//! ```compile_fail
//! #[rawtype::newtype]
//! struct Broken;
//! ```
//!
//! and only a fieldless struct can be a newtype:
//!
//! ```compile_fail
//! #[rawtype::newtype(u64)]
//! enum Broken { A }
//! ```

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Capability traits
// =============================================================================

mod ident;
mod marker;
mod set;
mod stride;

pub use ident::Identified;
pub use marker::NewType;
pub use set::SetOps;
pub use stride::Stride;

// =============================================================================
// Expander
// =============================================================================

pub use macros::newtype;

/// Hidden re-exports referenced by generated code. Not a public API.
#[doc(hidden)]
pub mod export {
    pub use num_traits;
    #[cfg(feature = "serde")]
    pub use serde;
}

/// Common items for newtype declarations and generic code over wrappers.
pub mod prelude {
    pub use crate::{Identified, NewType, SetOps, Stride, newtype};
}
