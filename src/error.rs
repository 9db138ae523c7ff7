//! Typed failures for the pieces that are built at startup. The terminal layer
//! and the binary wrap these in `anyhow` with context; these enums only exist so
//! tests and callers can match on what went wrong.

use thiserror::Error;

/// Problems decoding one of the escape literals in the symbol table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// A backslash was not followed by `u` and four hex digits.
    #[error("malformed escape sequence in {literal:?}")]
    MalformedEscape { literal: String },
    /// The four characters after `\u` were not hexadecimal.
    #[error("invalid hex digits {digits:?} in {literal:?}")]
    InvalidHex { literal: String, digits: String },
    /// The code point is a surrogate or otherwise not a Unicode scalar value.
    #[error("U+{code:04X} is not a valid character in {literal:?}")]
    InvalidScalar { literal: String, code: u32 },
}

/// Problems assembling the character list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("a roster needs at least one character")]
    Empty,
}
