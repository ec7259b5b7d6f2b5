//! Error types for the codec.
//!
//! All operations return structured errors rather than panicking.
//! This keeps the library safe to embed and the CLI's reporting clear.

use thiserror::Error;

/// Top-level error type for all codec operations.
///
/// Each variant corresponds to a specific failure domain:
/// - Sizing: a significant-bit count the size arithmetic cannot support
/// - Decoding: an input byte that is not part of the alphabet
#[derive(Debug, Error)]
pub enum Error {
    /// Significant-bit count beyond [`MAX_INPUT_BITS`](crate::codec::MAX_INPUT_BITS)
    #[error("bit count {bits} exceeds the supported maximum {max}")]
    BitCountTooLarge { bits: usize, max: usize },

    /// Decode input byte outside the Z-Base-32 alphabet
    #[error("invalid symbol {byte:#04x} at position {position}")]
    InvalidSymbol { byte: u8, position: usize },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
