use blurhash_decode::{base83, decode, BlurhashError};

// ---------------------------------------------------------------------------
// Known test vectors
// ---------------------------------------------------------------------------

/// Reference blurhash from the official spec / woltapp README.
const KNOWN_HASH: &str = "LEHV6nWB2yk8pyo0adR*.7kCMdnj";

/// DC-only hash (1x1 components) whose average colour is 0x808080.
const GRAY_HASH: &str = "00Eyb[";

// ===========================================================================
// Base83 tests
// ===========================================================================

#[test]
fn base83_decode_known() {
    // "10" in base83 = 1*83 + 0 = 83
    assert_eq!(base83::decode("10").unwrap(), 83);
    assert_eq!(base83::decode("~").unwrap(), 82);
}

#[test]
fn base83_decode_dc_field() {
    // Characters 2..6 of a hash hold the average colour at full precision.
    assert_eq!(base83::decode(&KNOWN_HASH[2..6]).unwrap(), 0x979695);
    assert_eq!(base83::decode(&GRAY_HASH[2..6]).unwrap(), 0x808080);
}

#[test]
fn base83_decode_rejects_invalid() {
    assert!(matches!(
        base83::decode("ab cd"),
        Err(BlurhashError::InvalidBase83Character(' '))
    ));
}

// ===========================================================================
// Decode tests
// ===========================================================================

#[test]
fn decode_length_is_rgba() {
    for &(w, h) in &[(1u32, 1u32), (4, 4), (8, 8), (16, 9)] {
        let pixels = decode(KNOWN_HASH, w, h, 1.0).unwrap();
        assert_eq!(pixels.len(), (w * h * 4) as usize, "{w}x{h}");
    }
}

#[test]
fn decode_alpha_always_opaque() {
    let pixels = decode(KNOWN_HASH, 8, 8, 1.0).unwrap();
    assert!(pixels.chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn decode_dc_only_is_solid() {
    let pixels = decode(GRAY_HASH, 8, 8, 1.0).unwrap();
    let first: [u8; 4] = pixels[0..4].try_into().unwrap();
    for px in pixels.chunks_exact(4) {
        assert_eq!(px, first, "1x1 components must decode to a solid colour");
    }
}

#[test]
fn decode_rejects_truncated_hash() {
    // The size flag of KNOWN_HASH promises 4x3 components (28 chars total).
    let truncated = &KNOWN_HASH[..10];
    assert!(matches!(
        decode(truncated, 4, 4, 1.0),
        Err(BlurhashError::InvalidLength {
            expected: 28,
            actual: 10
        })
    ));
}

#[test]
fn decode_rejects_multibyte_chars_without_panicking() {
    // "é0000" is 6 bytes, so it passes the length check, but its first
    // character spans two bytes; decoding must report the bad character
    // as an error value, never slice through it.
    assert_eq!(
        decode("é0000", 4, 4, 1.0),
        Err(BlurhashError::InvalidBase83Character('é'))
    );
}

#[test]
fn decode_rejects_garbage() {
    assert!(decode("not a blurhash", 4, 4, 1.0).is_err());
    assert!(decode("", 4, 4, 1.0).is_err());
}

#[test]
fn decode_is_pure() {
    let a = decode(KNOWN_HASH, 8, 8, 1.0).unwrap();
    let b = decode(KNOWN_HASH, 8, 8, 1.0).unwrap();
    assert_eq!(a, b);
}
