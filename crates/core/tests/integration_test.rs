//! Integration tests for the codec through its public API.
//!
//! These exercise the crate the way an embedding application would:
//! encode -> decode round trips over realistic buffers, the documented
//! known answers, and the error reporting surface.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use zbase32_core::{decode, decoded_len, encode, encoded_len, Error, MAX_INPUT_BITS};

/// Round-trip a buffer containing every possible byte value.
#[test]
fn test_all_byte_values() {
    let input: Vec<u8> = (0..=255).collect();

    let symbols = encode(&input, input.len() * 8).expect("encode failed");
    assert_eq!(symbols.len(), encoded_len(input.len() * 8));
    assert!(symbols.is_ascii());

    let decoded = decode(symbols.as_bytes()).expect("decode failed");
    assert_eq!(&decoded[..input.len()], &input[..]);
}

/// Round-trip a large buffer (64 KiB of seeded random data).
#[test]
fn test_large_buffer() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let input: Vec<u8> = (0..64 * 1024).map(|_| rng.gen()).collect();

    let symbols = encode(&input, input.len() * 8).expect("encode failed");
    println!("{} bytes -> {} symbols", input.len(), symbols.len());

    let decoded = decode(symbols.as_bytes()).expect("decode failed");
    assert_eq!(&decoded[..input.len()], &input[..]);
}

/// Seeded sweep across many lengths, covering every cycle residue.
#[test]
fn test_length_sweep() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for len in 0..200 {
        let input: Vec<u8> = (0..len).map(|_| rng.gen()).collect();

        let symbols = encode(&input, len * 8).unwrap();
        let decoded = decode(symbols.as_bytes()).unwrap();

        assert_eq!(decoded.len(), decoded_len(symbols.len()));
        assert_eq!(&decoded[..len], &input[..], "length {len}");
    }
}

/// The documented example: "foo" encodes to "c3zs6".
#[test]
fn test_documented_vector() {
    assert_eq!(encode(b"foo", 24).unwrap(), "c3zs6");

    let decoded = decode(b"c3zs6").unwrap();
    assert_eq!(decoded, vec![0x66, 0x6f, 0x6f, 0x00]);
}

/// The alphabet ordering is wire contract; spot-check both ends.
#[test]
fn test_alphabet_contract() {
    use zbase32_core::alphabet::ALPHABET;

    assert_eq!(ALPHABET, b"ybndrfg8ejkmcpqxot1uwisza345h769");
    assert_eq!(encode(&[0x00], 5).unwrap(), "y");
    assert_eq!(encode(&[0xf8], 5).unwrap(), "9");
}

/// Partial significant-bit counts drop trailing bytes but never corrupt
/// the covered ones.
#[test]
fn test_partial_bit_counts_never_invent_data() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let input: Vec<u8> = (0..32).map(|_| rng.gen()).collect();

    for bits in 0..=(input.len() * 8) {
        let symbols = encode(&input, bits).unwrap();
        assert_eq!(symbols.len(), encoded_len(bits));

        let decoded = decode(symbols.as_bytes()).unwrap();
        let whole = bits / 8;
        assert_eq!(&decoded[..whole], &input[..whole], "bits {bits}");
    }
}

/// Invalid symbols name the byte and where it was found.
#[test]
fn test_invalid_symbol_reporting() {
    let err = decode(b"ybndl").unwrap_err();
    assert_eq!(err.to_string(), "invalid symbol 0x6c at position 4");
    assert!(matches!(
        err,
        Error::InvalidSymbol {
            byte: b'l',
            position: 4
        }
    ));
}

/// Absurd bit counts are rejected before any allocation.
#[test]
fn test_oversized_bit_count_rejected() {
    let err = encode(&[], MAX_INPUT_BITS + 1).unwrap_err();
    assert!(matches!(err, Error::BitCountTooLarge { .. }));
    assert!(encode(&[], usize::MAX).is_err());
}
