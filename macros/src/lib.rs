//! Procedural macros for the rawtype newtype generator
//!
//! # Macro API
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[newtype]` | fieldless struct | Synthesize storage, constructor, marker impl, and capability forwarding |
//!
//! ## Example
//!
//! ```ignore
//! use rawtype::newtype;
//!
//! #[newtype(u64, caps(Eq, Ord, Hash, Display))]
//! pub struct RowIndex;
//!
//! let r = RowIndex::new(7);
//! assert_eq!(r.to_string(), "7");
//! ```

use proc_macro::TokenStream;

mod args;
mod diagnostics;
mod expand;
mod forward;
mod model;

/// Turn a fieldless struct into a newtype over a raw value type.
///
/// The first argument is the raw type. The optional `caps(...)` list selects
/// forwarded capabilities from the fixed catalog (see the `rawtype` crate
/// docs for the full table).
///
/// # Usage
///
/// ```ignore
/// #[newtype(u64)]
/// struct Plain;
///
/// #[newtype(u64, caps(Eq, Ord, Hash, Display, Additive, Zero))]
/// pub struct RowIndex;
///
/// #[newtype(HashSet<String>, caps(Eq, Set))]
/// pub struct Tags;
/// ```
///
/// The struct's own visibility is mirrored onto every generated member. The
/// attribute rejects anything that is not a fieldless struct, and rejects an
/// absent or malformed raw-type argument; both are hard errors with no
/// partial output.
///
/// ```ignore
/// #[newtype]                 // error: missing raw type
/// struct Broken;
///
/// #[newtype(u64)]            // error: only a struct can be a newtype
/// enum Broken { A }
/// ```
#[proc_macro_attribute]
pub fn newtype(attr: TokenStream, item: TokenStream) -> TokenStream {
    expand::expand_newtype(attr.into(), item.into()).into()
}
