//! Error types for field expression parsing.

/// Errors produced while building a value set from a field expression.
///
/// There are two kinds: syntax errors (a token does not match the field
/// grammar) and domain errors (a well-formed token denotes a value
/// outside the field's bounds). A descending range on a non-wrapping
/// field is a domain-kind error carried in its own variant so the
/// message can show both endpoints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetError {
    /// Token does not match the field grammar.
    #[error("unrecognized token '{token}' in field expression")]
    Syntax { token: String },

    /// Value is outside the field's valid range.
    #[error("value {value} is outside the valid range {min}-{max}")]
    Domain { value: i64, min: u32, max: u32 },

    /// Descending range on a field whose domain does not wrap.
    #[error("descending range {start}-{end} is not valid here (values {min}-{max} do not wrap)")]
    ReversedRange {
        start: u32,
        end: u32,
        min: u32,
        max: u32,
    },
}
