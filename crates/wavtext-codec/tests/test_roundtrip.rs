//! Round-trip tests: decode(encode(x, depth)) == x.

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use wavtext_codec::{decode, encode, BitDepth, Encoder};

const DEPTHS: [u16; 3] = [8, 16, 32];

fn roundtrip(payload: &[u8], bits: u16) -> Vec<u8> {
    let wav = encode(payload, bits).unwrap();
    decode(&wav).unwrap()
}

// ============================================================================
// Fixed payloads
// ============================================================================

#[test]
fn test_empty_payload() {
    for bits in DEPTHS {
        assert_eq!(roundtrip(b"", bits), Vec::<u8>::new());
    }
}

#[test]
fn test_single_byte_payloads() {
    for bits in DEPTHS {
        for byte in [0u8, 1, 127, 128, 254, 255] {
            assert_eq!(roundtrip(&[byte], bits), vec![byte], "{} bits", bits);
        }
    }
}

#[test]
fn test_every_byte_value() {
    let payload: Vec<u8> = (0..=255u8).chain((0..=255u8).rev()).collect();
    for bits in DEPTHS {
        assert_eq!(roundtrip(&payload, bits), payload);
    }
}

#[test]
fn test_megabyte_payload() {
    let payload: Vec<u8> = (0..1_048_576u32)
        .map(|i| (i.wrapping_mul(2_654_435_761) >> 13) as u8)
        .collect();
    for bits in DEPTHS {
        assert!(roundtrip(&payload, bits) == payload, "{} bits", bits);
    }
}

#[test]
fn test_utf8_text_payload() {
    let payload = "Grüße, мир, 世界\n\ttabs and newlines\r\n".as_bytes();
    assert_eq!(roundtrip(payload, 16), payload.to_vec());
}

#[test]
fn test_payload_containing_magic() {
    let payload = b"ENCODED_TEXT:ENCODED_TEXT:SGVsbG8=";
    for bits in DEPTHS {
        assert_eq!(roundtrip(payload, bits), payload.to_vec());
    }
}

#[test]
fn test_encoder_value_matches_free_function() {
    for depth in BitDepth::ALL {
        assert_eq!(
            Encoder::new(depth).encode(b"same bytes").unwrap(),
            encode(b"same bytes", depth.bits()).unwrap()
        );
    }
}

#[test]
fn test_encoding_is_deterministic() {
    let a = encode(b"deterministic", 32).unwrap();
    let b = encode(b"deterministic", 32).unwrap();
    assert!(a == b);
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Any payload survives a round trip at any supported depth.
    #[test]
    fn roundtrip_any_payload(
        payload in prop::collection::vec(any::<u8>(), 0..2048),
        depth in prop::sample::select(BitDepth::ALL.to_vec()),
    ) {
        let wav = Encoder::new(depth).encode(&payload).unwrap();
        prop_assert_eq!(decode(&wav).unwrap(), payload);
    }

    /// Depths outside {8, 16, 32} are always rejected.
    #[test]
    fn unsupported_depths_rejected(bits in any::<u16>()) {
        prop_assume!(!DEPTHS.contains(&bits));
        prop_assert!(encode(b"x", bits).is_err());
    }
}
