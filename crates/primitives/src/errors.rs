//! Errors during parsing/handling/conversion of primitives.

use thiserror::Error;

/// Failure to turn external text into a primitive value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Hex input was not the exact number of characters the buffer needs.
    #[error("expected {expected} hex chars, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Hex input contained something other than hex digits.
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}
