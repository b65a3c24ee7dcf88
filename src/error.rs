//! Error types
//!
//! Hashing never fails. The only recoverable error in the crate comes from
//! reading a digest back from text.

use thiserror::Error;

/// Failure to read a digest from its hexadecimal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseDigestError {
    /// The text is not exactly two characters per digest byte.
    #[error("expected {expected} hex characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A character outside `0-9`, `a-f` and `A-F`.
    #[error("invalid hex character {byte:#04x} at index {index}")]
    InvalidCharacter { index: usize, byte: u8 },
}
