//! Wrapper model shared by the expander and the forwarding catalog.

use proc_macro2::TokenStream;
use syn::{Ident, Type, Visibility};

use crate::forward;

/// Everything the generators need to know about one wrapper declaration.
pub struct WrapperModel {
    /// The wrapper's name.
    pub name: Ident,
    /// The declaration's own visibility, mirrored onto generated members.
    pub vis: Visibility,
    /// The raw type captured from the attribute, used verbatim.
    pub raw: Type,
}

/// The fixed capability catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cap {
    Eq,
    Ord,
    Hash,
    Display,
    Debug,
    Additive,
    Zero,
    Default,
    From,
    FromStr,
    Serialize,
    Deserialize,
    Id,
    Set,
    Stride,
}

impl Cap {
    /// Resolve a `caps(...)` entry, `None` if the name is not in the catalog.
    pub fn from_ident(ident: &Ident) -> Option<Self> {
        let cap = match ident.to_string().as_str() {
            "Eq" => Self::Eq,
            "Ord" => Self::Ord,
            "Hash" => Self::Hash,
            "Display" => Self::Display,
            "Debug" => Self::Debug,
            "Additive" => Self::Additive,
            "Zero" => Self::Zero,
            "Default" => Self::Default,
            "From" => Self::From,
            "FromStr" => Self::FromStr,
            "Serialize" => Self::Serialize,
            "Deserialize" => Self::Deserialize,
            "Id" => Self::Id,
            "Set" => Self::Set,
            "Stride" => Self::Stride,
            _ => return None,
        };
        Some(cap)
    }

    /// Emit the forwarding impls for one wrapper.
    pub fn expand(self, model: &WrapperModel) -> TokenStream {
        match self {
            Self::Eq => forward::cmp::expand_eq(model),
            Self::Ord => forward::cmp::expand_ord(model),
            Self::Hash => forward::hash::expand_hash(model),
            Self::Display => forward::fmt::expand_display(model),
            Self::Debug => forward::fmt::expand_debug(model),
            Self::Additive => forward::arith::expand_additive(model),
            Self::Zero => forward::arith::expand_zero(model),
            Self::Default => forward::convert::expand_default(model),
            Self::From => forward::convert::expand_from(model),
            Self::FromStr => forward::convert::expand_from_str(model),
            Self::Serialize => forward::serde::expand_serialize(model),
            Self::Deserialize => forward::serde::expand_deserialize(model),
            Self::Id => forward::id::expand_id(model),
            Self::Set => forward::set::expand_set(model),
            Self::Stride => forward::stride::expand_stride(model),
        }
    }
}
