//! The Z-Base-32 alphabet and its reverse lookup table.
//!
//! Z-Base-32 orders its 32 characters by how easy they are to read and
//! transcribe, so the ordering itself is part of the wire contract:
//! index 0 must be `y`, index 31 must be `9`, and so on. Both lookup
//! directions are compile-time constants with no mutation API.

/// The 32 symbol characters, in index order (0-31).
///
/// Chosen to avoid visually ambiguous pairs (no `l`, `v`, `0` or `2`).
/// Interoperability with other Z-Base-32 implementations depends on this
/// exact ordering.
pub const ALPHABET: &[u8; 32] = b"ybndrfg8ejkmcpqxot1uwisza345h769";

/// Marker in the reverse table for bytes that are not symbols.
const INVALID: u8 = 0xff;

/// Maps every byte value to its alphabet index, or `INVALID`.
const REVERSE: [u8; 256] = build_reverse();

const fn build_reverse() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Return the symbol character for a 5-bit group.
///
/// Only the low 5 bits of `group` are used.
pub(crate) fn symbol(group: u8) -> u8 {
    ALPHABET[(group & 0x1f) as usize]
}

/// Return the alphabet index (0-31) of a symbol byte, or `None` if the
/// byte is not a Z-Base-32 symbol.
///
/// The sentinel never escapes this function; callers see an `Option`.
pub(crate) fn index_of(byte: u8) -> Option<u8> {
    match REVERSE[byte as usize] {
        INVALID => None,
        index => Some(index),
    }
}
