//! Structured expansion diagnostics.
//!
//! Every expansion-blocking error carries a stable id within the `newtype`
//! domain, a human-readable message, and an anchor span pointing at the
//! syntax that caused it. Expansion aborts on the first diagnostic; no
//! partial output is ever produced.

use proc_macro2::{Span, TokenStream};

/// Diagnostic domain for this expander.
pub const DOMAIN: &str = "newtype";

/// Stable ids for the expansion-blocking errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticId {
    /// The attribute carries no raw-type argument, or its arguments are
    /// malformed (more than one raw type, unexpected tokens).
    MissingRawType,
    /// The annotated item is not a fieldless, non-generic struct.
    NotStruct,
    /// A `caps(...)` entry names no capability in the catalog.
    UnknownCap,
    /// A capability is listed twice.
    DuplicateCap,
}

impl DiagnosticId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingRawType => "missing_raw_type",
            Self::NotStruct => "not_struct",
            Self::UnknownCap => "unknown_cap",
            Self::DuplicateCap => "duplicate_cap",
        }
    }
}

/// Severity of a diagnostic. Expansion never warns; every diagnostic blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
}

/// One structured diagnostic anchored to a source span.
#[derive(Debug)]
pub struct Diagnostic {
    pub id: DiagnosticId,
    pub severity: Severity,
    pub message: String,
    pub span: Span,
}

impl Diagnostic {
    pub fn error(id: DiagnosticId, span: Span, message: impl Into<String>) -> Self {
        Diagnostic {
            id,
            severity: Severity::Error,
            message: message.into(),
            span,
        }
    }

    /// Render as a `compile_error!` stream at the anchor span. The rendered
    /// text carries the domain and id alongside the message.
    pub fn to_compile_error(&self) -> TokenStream {
        let rendered = match self.severity {
            Severity::Error => format!("{DOMAIN}[{}]: {}", self.id.as_str(), self.message),
        };
        syn::Error::new(self.span, rendered).to_compile_error()
    }
}
