//! BlurHash decoding: convert a BlurHash string into an RGBA pixel grid.
//!
//! The decoder parses the base83-encoded BlurHash string, extracts the DCT
//! components, and reconstructs a raster of the specified dimensions. Output
//! is RGBA interleaved (alpha always 255) so the grid can be consumed like
//! browser `ImageData` by the gradient synthesizer.

use std::f64::consts::PI;

use crate::base83;
use crate::color::{linear_to_srgb, sign_pow, srgb_to_linear};
use crate::error::BlurhashError;

/// Decode a BlurHash string into a flat RGBA byte array.
///
/// # Arguments
///
/// * `blurhash` - The BlurHash string to decode.
/// * `width` - The desired output raster width.
/// * `height` - The desired output raster height.
/// * `punch` - Factor to boost/reduce contrast of the decoded raster (1.0 = normal).
///
/// # Returns
///
/// A `Vec<u8>` of length `width * height * 4` containing RGBA pixel data in
/// row-major order. The alpha channel is always 255.
///
/// # Errors
///
/// Returns an error if the BlurHash string is invalid (wrong length or invalid characters).
///
/// # Examples
///
/// ```
/// use blurhash_decode::decode;
/// let pixels = decode("LEHV6nWB2yk8pyo0adR*.7kCMdnj", 8, 8, 1.0).unwrap();
/// assert_eq!(pixels.len(), 8 * 8 * 4);
/// ```
pub fn decode(
    blurhash: &str,
    width: u32,
    height: u32,
    punch: f64,
) -> Result<Vec<u8>, BlurhashError> {
    if blurhash.len() < 6 {
        return Err(BlurhashError::InvalidLength {
            expected: 6,
            actual: blurhash.len(),
        });
    }

    // The byte-range slicing below requires an all-ASCII hash; a non-ASCII
    // character is by definition outside the base83 alphabet, and slicing
    // through the middle of one would panic rather than err.
    if let Some(ch) = blurhash.chars().find(|ch| !ch.is_ascii()) {
        return Err(BlurhashError::InvalidBase83Character(ch));
    }

    let size_info = base83::decode(&blurhash[0..1])?;
    let size_y = (size_info / 9) + 1;
    let size_x = (size_info % 9) + 1;

    let expected_len = 4 + 2 * (size_x * size_y) as usize;
    if blurhash.len() != expected_len {
        return Err(BlurhashError::InvalidLength {
            expected: expected_len,
            actual: blurhash.len(),
        });
    }

    let quant_max_value = base83::decode(&blurhash[1..2])?;
    let real_max_value = (quant_max_value as f64 + 1.0) / 166.0 * punch;

    // Decode DC component.
    let dc_value = base83::decode(&blurhash[2..6])?;
    let dc_r = srgb_to_linear((dc_value >> 16) as u8);
    let dc_g = srgb_to_linear(((dc_value >> 8) & 255) as u8);
    let dc_b = srgb_to_linear((dc_value & 255) as u8);

    let num_components = (size_x * size_y) as usize;
    let mut colours: Vec<[f64; 3]> = Vec::with_capacity(num_components);
    colours.push([dc_r, dc_g, dc_b]);

    // Decode AC components.
    for component_idx in 1..num_components {
        let start = 4 + component_idx * 2;
        let ac_value = base83::decode(&blurhash[start..start + 2])?;

        let quant_r = (ac_value / (19 * 19)) as f64;
        let quant_g = ((ac_value / 19) % 19) as f64;
        let quant_b = (ac_value % 19) as f64;

        colours.push([
            sign_pow((quant_r - 9.0) / 9.0, 2.0) * real_max_value,
            sign_pow((quant_g - 9.0) / 9.0, 2.0) * real_max_value,
            sign_pow((quant_b - 9.0) / 9.0, 2.0) * real_max_value,
        ]);
    }

    let w = width as usize;
    let h = height as usize;
    let wf = width as f64;
    let hf = height as f64;

    // Precompute cosine tables.
    let cos_x: Vec<Vec<f64>> = (0..size_x as usize)
        .map(|i| {
            (0..w)
                .map(|x| (PI * x as f64 * i as f64 / wf).cos())
                .collect()
        })
        .collect();
    let cos_y: Vec<Vec<f64>> = (0..size_y as usize)
        .map(|j| {
            (0..h)
                .map(|y| (PI * y as f64 * j as f64 / hf).cos())
                .collect()
        })
        .collect();

    // Reconstruct the raster.
    let mut result = vec![0u8; w * h * 4];

    for y in 0..h {
        for x in 0..w {
            let mut pixel_r = 0.0f64;
            let mut pixel_g = 0.0f64;
            let mut pixel_b = 0.0f64;

            for j in 0..size_y as usize {
                let cy = cos_y[j][y];
                for i in 0..size_x as usize {
                    let basis = cos_x[i][x] * cy;
                    let colour = &colours[i + j * size_x as usize];
                    pixel_r += colour[0] * basis;
                    pixel_g += colour[1] * basis;
                    pixel_b += colour[2] * basis;
                }
            }

            let idx = (y * w + x) * 4;
            result[idx] = linear_to_srgb(pixel_r);
            result[idx + 1] = linear_to_srgb(pixel_g);
            result[idx + 2] = linear_to_srgb(pixel_b);
            result[idx + 3] = 255;
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Well-known reference hash from the woltapp README (4x3 components).
    const KNOWN_HASH: &str = "LEHV6nWB2yk8pyo0adR*.7kCMdnj";

    /// Hand-built DC-only hash: 1x1 components, average colour 0x808080.
    const GRAY_HASH: &str = "00Eyb[";

    #[test]
    fn test_decode_output_size() {
        let pixels = decode(KNOWN_HASH, 32, 32, 1.0).unwrap();
        assert_eq!(pixels.len(), 32 * 32 * 4);
    }

    #[test]
    fn test_decode_alpha_opaque() {
        let pixels = decode(KNOWN_HASH, 8, 8, 1.0).unwrap();
        for px in pixels.chunks_exact(4) {
            assert_eq!(px[3], 255);
        }
    }

    #[test]
    fn test_decode_too_short() {
        assert!(matches!(
            decode("ABC", 32, 32, 1.0),
            Err(BlurhashError::InvalidLength {
                expected: 6,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_decode_wrong_length() {
        // Valid first char but string is truncated
        assert!(decode("L00000", 32, 32, 1.0).is_err());
    }

    #[test]
    fn test_decode_invalid_char() {
        assert!(matches!(
            decode("0 Eyb[", 4, 4, 1.0),
            Err(BlurhashError::InvalidBase83Character(' '))
        ));
    }

    #[test]
    fn test_decode_multibyte_char_errors() {
        // 'é' spans two bytes; slicing the size flag out of this hash would
        // split the character if it were not rejected first.
        assert_eq!(
            decode("é0000", 4, 4, 1.0),
            Err(BlurhashError::InvalidBase83Character('é'))
        );
        // Multi-byte character later in the string (body slice boundaries).
        assert_eq!(
            decode("00Ey€b[x", 4, 4, 1.0),
            Err(BlurhashError::InvalidBase83Character('€'))
        );
    }

    #[test]
    fn test_decode_dc_only_solid() {
        // With 1x1 components every output pixel is the DC colour.
        let pixels = decode(GRAY_HASH, 4, 4, 1.0).unwrap();
        for (i, px) in pixels.chunks_exact(4).enumerate() {
            for c in 0..3 {
                assert!(
                    (px[c] as i16 - 128).unsigned_abs() <= 1,
                    "pixel {i} channel {c}: expected ~128, got {}",
                    px[c]
                );
            }
        }
    }

    #[test]
    fn test_decode_deterministic() {
        let a = decode(KNOWN_HASH, 8, 8, 1.0).unwrap();
        let b = decode(KNOWN_HASH, 8, 8, 1.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_decode_punch() {
        let normal = decode(KNOWN_HASH, 4, 4, 1.0).unwrap();
        let punched = decode(KNOWN_HASH, 4, 4, 2.0).unwrap();
        // Punched version should generally have more contrast
        // (different pixel values from normal)
        assert_ne!(normal, punched);
    }
}
