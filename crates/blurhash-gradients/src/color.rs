//! Compact colour quantization and average-colour extraction.

use blurhash_decode::base83;
use blurhash_decode::BlurhashError;

/// Quantize an 8-bit RGB triple to a compact 3-digit hex string (`#rgb`).
///
/// Each channel is floor-divided by 16, leaving 16 levels per channel (4096
/// colours total). Lossy and one-way; the point is to keep the generated
/// CSS small.
///
/// # Examples
///
/// ```
/// use blurhash_gradients::color::compact_hex;
/// assert_eq!(compact_hex(0, 0, 0), "#000");
/// assert_eq!(compact_hex(255, 255, 255), "#fff");
/// assert_eq!(compact_hex(0x12, 0x34, 0x56), "#135");
/// ```
pub fn compact_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:x}{:x}{:x}", r / 16, g / 16, b / 16)
}

/// Extract a BlurHash's embedded average colour as a compact hex string.
///
/// Every BlurHash carries its average colour at full precision in the four
/// base83 characters at offsets 2..6, independent of component counts. This
/// reads that field directly; it never runs the pixel-grid decoder, so the
/// result does not depend on any requested decode resolution.
///
/// # Errors
///
/// Returns [`BlurhashError::InvalidLength`] if the hash is shorter than 6
/// characters, or a base83 error if the field contains an invalid character.
///
/// # Examples
///
/// ```
/// use blurhash_gradients::color::average_color;
/// assert_eq!(average_color("LEHV6nWB2yk8pyo0adR*.7kCMdnj").unwrap(), "#999");
/// ```
pub fn average_color(blurhash: &str) -> Result<String, BlurhashError> {
    let field = blurhash.get(2..6).ok_or(BlurhashError::InvalidLength {
        expected: 6,
        actual: blurhash.len(),
    })?;
    // 24-bit value: 8 bits red, 8 bits green, 8 bits blue.
    let value = base83::decode(field)?;

    let r = (value >> 16) as u8;
    let g = ((value >> 8) & 0xff) as u8;
    let b = (value & 0xff) as u8;

    Ok(compact_hex(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_hex_extremes() {
        assert_eq!(compact_hex(0, 0, 0), "#000");
        assert_eq!(compact_hex(255, 255, 255), "#fff");
    }

    #[test]
    fn test_compact_hex_floors() {
        // 15 and 0 land in the same bucket; 16 starts the next one.
        assert_eq!(compact_hex(15, 16, 31), "#011");
    }

    #[test]
    fn test_compact_hex_shape() {
        for (r, g, b) in [(0u8, 0u8, 0u8), (128, 64, 200), (255, 1, 17), (9, 250, 99)] {
            let hex = compact_hex(r, g, b);
            assert_eq!(hex.len(), 4);
            assert!(hex.starts_with('#'));
            assert!(hex[1..].bytes().all(|c| c.is_ascii_hexdigit()));
            assert_eq!(hex.to_lowercase(), hex);
        }
    }

    #[test]
    fn test_average_color_known_hash() {
        // "HV6n" decodes to 0x979695 -> quantized "#999".
        assert_eq!(average_color("LEHV6nWB2yk8pyo0adR*.7kCMdnj").unwrap(), "#999");
        // "Eyb[" decodes to 0x808080 -> "#888".
        assert_eq!(average_color("00Eyb[").unwrap(), "#888");
    }

    #[test]
    fn test_average_color_too_short() {
        assert!(matches!(
            average_color("LEHV6"),
            Err(BlurhashError::InvalidLength {
                expected: 6,
                actual: 5
            })
        ));
        assert!(average_color("").is_err());
    }

    #[test]
    fn test_average_color_invalid_field() {
        assert!(matches!(
            average_color("00 ~~!"),
            Err(BlurhashError::InvalidBase83Character(_))
        ));
    }
}
