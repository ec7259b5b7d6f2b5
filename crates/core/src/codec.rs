//! Bit-level packing and unpacking between bytes and 5-bit symbols.
//!
//! Encoding walks the input as an MSB-first bit stream and regroups it
//! into 5-bit values; decoding reverses this. Because lcm(5, 8) = 40,
//! the alignment between symbols and bytes repeats every 8 symbols (5
//! bytes), so the whole transform reduces to a constant cycle of 8
//! phases:
//!
//! ```text
//! bit     0         1         2         3
//!         0123456789012345678901234567890123456789
//! bytes   [  0   ][  1   ][  2   ][  3   ][  4   ]
//! symbols [ 0 ][ 1 ][ 2 ][ 3 ][ 4 ][ 5 ][ 6 ][ 7 ]
//! ```
//!
//! Each phase extracts (or deposits) its group through a 16-bit
//! big-endian window over the current input byte and its successor, so
//! no phase needs more than one shift and one mask.
//!
//! # Padding Rules
//! - encode: the significant-bit count rounds up to a multiple of 5;
//!   input bytes missing from the rounded range read as zero
//! - decode: a trailing partial group fills its last byte's low bits
//!   with zeros (callers track the exact bit count themselves)
//!
//! # Example
//! ```
//! use zbase32_core::codec::{decode, encode};
//!
//! let symbols = encode(b"foo", 24).unwrap();
//! assert_eq!(symbols, "c3zs6");
//!
//! let bytes = decode(symbols.as_bytes()).unwrap();
//! assert_eq!(&bytes[..3], b"foo");
//! ```

use crate::alphabet;
use crate::error::{Error, Result};

/// Upper bound on the `significant_bits` argument to [`encode`].
///
/// Below this bound the rounded bit count and the symbol count stay
/// within `usize`, and the symbol count never exceeds `usize::MAX / 8`,
/// so even the output's size in bits (8 per symbol character) remains
/// representable.
pub const MAX_INPUT_BITS: usize = usize::MAX / 8 * 5;

/// Decoded bytes produced by a trailing partial group of 0-7 symbols.
///
/// A partial group of `r` symbols carries `r * 5` bits and decodes into
/// every byte those bits touch.
const PARTIAL_GROUP_BYTES: [usize; 8] = [0, 1, 2, 2, 3, 4, 4, 5];

/// One step of the period-8 alignment cycle.
///
/// The symbol at position `k` starts `(k * 5) % 8` bits into the
/// current input byte. Loading that byte and its successor into a
/// big-endian u16 window places the 5-bit group `11 - offset` bits from
/// the low end.
///
/// # Invariants
/// - `shift` is in 4..=11
/// - `advance` is set exactly when the group reaches the last bit of
///   the current byte (offset >= 3), consuming it
#[derive(Debug, Clone, Copy)]
struct Phase {
    /// Right-shift aligning the group with the window's low bits.
    shift: u8,
    /// Whether this step consumes the current input byte.
    advance: bool,
}

impl Phase {
    /// True when the group crosses into the successor byte (offset > 3),
    /// so a decode deposits into two output bytes.
    fn spills(self) -> bool {
        self.shift < 8
    }
}

/// The eight alignment phases, indexed by symbol position mod 8.
///
/// Bit offsets run 0, 5, 2, 7, 4, 1, 6, 3 and then repeat. Five of the
/// eight steps consume an input byte, which is how 8 symbols line up
/// with 5 bytes.
const CYCLE: [Phase; 8] = [
    Phase { shift: 11, advance: false },
    Phase { shift: 6, advance: true },
    Phase { shift: 9, advance: false },
    Phase { shift: 4, advance: true },
    Phase { shift: 7, advance: true },
    Phase { shift: 10, advance: false },
    Phase { shift: 5, advance: true },
    Phase { shift: 8, advance: true },
];

/// Number of symbol characters produced by encoding `bits` significant
/// bits: `bits` rounded up to a multiple of 5, divided by 5.
///
/// Pure and total; usable on its own to pre-size buffers.
pub fn encoded_len(bits: usize) -> usize {
    bits.div_ceil(5)
}

/// Number of bytes produced by decoding `symbols` symbol characters.
///
/// Whole groups of 8 symbols decode to 5 bytes each; a trailing partial
/// group of 0-7 symbols contributes 0, 1, 2, 2, 3, 4, 4 or 5 more.
///
/// Pure and total; usable on its own to pre-size buffers.
pub fn decoded_len(symbols: usize) -> usize {
    symbols / 8 * 5 + PARTIAL_GROUP_BYTES[symbols % 8]
}

/// Read a byte from the input, treating positions past the end as zero.
///
/// This is the zero-extension rule: a buffer shorter than the rounded
/// bit range behaves as if padded with zero bytes, without copying.
fn byte_at(input: &[u8], index: usize) -> u8 {
    input.get(index).copied().unwrap_or(0)
}

/// Encode binary data to Z-Base-32 symbol characters.
///
/// `significant_bits` says how many leading bits of `input` matter. The
/// count is rounded up to the next multiple of 5 (every symbol carries
/// exactly 5 bits), and input bytes the rounded range needs beyond the
/// end of the buffer read as zero.
///
/// Within the rounded range the buffer is read at byte granularity:
/// bits sharing a byte with the significant region are emitted as
/// found, not masked. Callers who need those bits zero must clear them
/// first.
///
/// # Arguments
/// - `input`: the binary input buffer
/// - `significant_bits`: number of leading bits of `input` to encode
///
/// # Errors
/// Returns `Error::BitCountTooLarge` if `significant_bits` exceeds
/// [`MAX_INPUT_BITS`].
pub fn encode(input: &[u8], significant_bits: usize) -> Result<String> {
    if significant_bits > MAX_INPUT_BITS {
        return Err(Error::BitCountTooLarge {
            bits: significant_bits,
            max: MAX_INPUT_BITS,
        });
    }

    let symbol_count = encoded_len(significant_bits);
    let mut symbols = String::with_capacity(symbol_count);
    let mut cursor = 0;

    for position in 0..symbol_count {
        let phase = CYCLE[position % 8];
        let window = u16::from_be_bytes([byte_at(input, cursor), byte_at(input, cursor + 1)]);
        let group = ((window >> phase.shift) & 0x1f) as u8;
        symbols.push(alphabet::symbol(group) as char);
        if phase.advance {
            cursor += 1;
        }
    }

    Ok(symbols)
}

/// Decode Z-Base-32 symbol characters back to binary data.
///
/// The output length follows [`decoded_len`]; a trailing partial group
/// decodes into every byte its bits touch, so the final byte may carry
/// zero padding in its low bits.
///
/// # Errors
/// Returns `Error::InvalidSymbol` for the first input byte that is not
/// part of the alphabet; the partially decoded buffer is discarded.
pub fn decode(symbols: &[u8]) -> Result<Vec<u8>> {
    let mut output = vec![0u8; decoded_len(symbols.len())];
    let mut cursor = 0;

    for (position, &byte) in symbols.iter().enumerate() {
        let index = alphabet::index_of(byte).ok_or(Error::InvalidSymbol { byte, position })?;
        let phase = CYCLE[position % 8];

        // Place the group at its offset within the two-byte window and
        // OR the halves in; decoded_len sizes the buffer so every
        // deposit lands in bounds.
        let [high, low] = ((index as u16) << phase.shift).to_be_bytes();
        output[cursor] |= high;
        if phase.spills() {
            output[cursor + 1] |= low;
        }
        if phase.advance {
            cursor += 1;
        }
    }

    Ok(output)
}
