//! Base83 decoding used by the BlurHash format.
//!
//! BlurHash stores all of its fields in a custom base83 encoding with a
//! fixed 83-character alphabet. This module decodes base83 substrings into
//! integers; the gradient layer also calls it directly on the 4-character
//! average-colour field of a hash.

use crate::error::BlurhashError;

/// The 83-character alphabet used by BlurHash base83 encoding.
const ALPHABET: &[u8; 83] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz#$%*+,-.:;=?@[]^_{|}~";

/// Lookup table mapping ASCII byte values to their base83 digit value.
/// Invalid characters map to `255`.
const fn build_decode_lut() -> [u8; 128] {
    let mut lut = [255u8; 128];
    let mut i = 0;
    while i < 83 {
        lut[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    lut
}

/// Precomputed decode lookup table (computed at compile time).
static DECODE_LUT: [u8; 128] = build_decode_lut();

/// Decode a base83 string into an integer.
///
/// # Errors
///
/// Returns [`BlurhashError::InvalidBase83Character`] if the string contains
/// a character not in the base83 alphabet, or [`BlurhashError::Base83Overflow`]
/// if the accumulated value does not fit in a `u64`.
///
/// # Examples
///
/// ```
/// use blurhash_decode::base83::decode;
/// assert_eq!(decode("0").unwrap(), 0);
/// assert_eq!(decode("~").unwrap(), 82);
/// ```
pub fn decode(base83_str: &str) -> Result<u64, BlurhashError> {
    let mut value: u64 = 0;
    for ch in base83_str.bytes() {
        if ch >= 128 {
            return Err(BlurhashError::InvalidBase83Character(ch as char));
        }
        let digit = DECODE_LUT[ch as usize];
        if digit == 255 {
            return Err(BlurhashError::InvalidBase83Character(ch as char));
        }
        value = value
            .checked_mul(83)
            .and_then(|v| v.checked_add(digit as u64))
            .ok_or_else(|| BlurhashError::Base83Overflow(base83_str.to_string()))?;
    }
    Ok(value)
}
