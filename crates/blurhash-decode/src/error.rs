//! Error types for BlurHash decoding.

use thiserror::Error;

/// Errors that can occur while decoding a BlurHash string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlurhashError {
    /// The BlurHash string has an invalid length.
    #[error("invalid BlurHash length: expected {expected}, got {actual}")]
    InvalidLength {
        /// The expected length.
        expected: usize,
        /// The actual length.
        actual: usize,
    },

    /// An invalid character was encountered during base83 decoding.
    #[error("invalid base83 character: {0:?}")]
    InvalidBase83Character(char),

    /// The accumulated base83 value overflowed a `u64`.
    #[error("base83 value overflow decoding {0:?}")]
    Base83Overflow(String),
}
