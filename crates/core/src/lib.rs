//! zbase32-core: Z-Base-32 binary-to-text codec
//!
//! This library implements the human-oriented base-32 encoding: it
//! packs an MSB-first bit stream into 5-bit symbols drawn from an
//! alphabet ordered for easy human transcription, and unpacks symbol
//! streams back into bytes.
//!
//! # Architecture
//!
//! The crate is small and the module boundaries are simple:
//! - `alphabet`: the forward table and its constant reverse lookup
//! - `codec`: the period-8 phase cycle, encode/decode, sizing helpers
//! - `error`: structured error types
//!
//! # Design Principles
//!
//! - **No panics**: all failures are structured and recoverable
//! - **Exact sizing**: output buffers are sized up front by pure helpers
//! - **Constant tables**: both lookup directions are compile-time data,
//!   safely shared across threads
//! - **Fail fast**: a byte outside the alphabet aborts a decode instead
//!   of corrupting the output

pub mod alphabet;
pub mod codec;
pub mod error;

// Re-export commonly used types
pub use codec::{decode, decoded_len, encode, encoded_len, MAX_INPUT_BITS};
pub use error::{Error, Result};
