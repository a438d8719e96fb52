//! The gradient synthesizer: BlurHash string in, CSS property bundle out.

use blurhash_decode::BlurhashError;

use crate::color::{average_color, compact_hex};
use crate::css::{as_percentage, BlurhashCss};

/// Bytes per decoded pixel (RGBA).
const CHANNELS: usize = 4;

/// Options for [`as_gradients`]. Fields left as `None` fall back to their
/// documented defaults, each independently of the others.
///
/// ```
/// use blurhash_gradients::GradientOptions;
///
/// // 4 columns, default row count and blur radius.
/// let options = GradientOptions {
///     width: Some(4),
///     ..GradientOptions::default()
/// };
/// # let _ = options;
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GradientOptions {
    /// Grid columns (one gradient layer per column). Default: 8.
    pub width: Option<u32>,
    /// Grid rows (one colour stop per row). Default: 8.
    pub height: Option<u32>,
    /// Radius of the CSS blur filter, in pixels. Default: 20.
    pub blur: Option<u32>,
}

impl GradientOptions {
    /// Default grid width.
    pub const DEFAULT_WIDTH: u32 = 8;
    /// Default grid height.
    pub const DEFAULT_HEIGHT: u32 = 8;
    /// Default blur radius in pixels.
    pub const DEFAULT_BLUR: u32 = 20;

    fn resolved(self) -> (u32, u32, u32) {
        (
            self.width.unwrap_or(Self::DEFAULT_WIDTH),
            self.height.unwrap_or(Self::DEFAULT_HEIGHT),
            self.blur.unwrap_or(Self::DEFAULT_BLUR),
        )
    }
}

/// Approximate the appearance of a BlurHash using CSS gradients.
///
/// Decodes the hash into a `width` x `height` RGBA grid, then renders each
/// column as one top-to-bottom `linear-gradient` layer of quantized colour
/// stops. Layers are spread evenly across the element via
/// `background-position` and sized to one vertical strip each. The bundle is
/// completed with a blur filter, a clip path that keeps the blur inside the
/// element, and an average-colour `box-shadow` backdrop.
///
/// Every call is a pure computation: identical inputs produce an identical
/// bundle.
///
/// Degenerate resolutions are total, not errors: `width` 0 yields empty
/// `background_image`/`background_position` lists and an `inf%` strip
/// width, and `height` below 2 yields gradients with fewer than two stops.
/// Neither renders usefully.
///
/// # Errors
///
/// Fails exactly when the decoder rejects the hash; errors are propagated
/// unmodified.
///
/// # Examples
///
/// ```
/// use blurhash_gradients::{as_gradients, GradientOptions};
///
/// let css = as_gradients("LEHV6nWB2yk8pyo0adR*.7kCMdnj", GradientOptions::default()).unwrap();
/// assert_eq!(css.background_repeat, "no-repeat");
/// assert_eq!(css.box_shadow, "0 0 0 10000px #999");
/// ```
pub fn as_gradients(
    blurhash: &str,
    options: GradientOptions,
) -> Result<BlurhashCss, BlurhashError> {
    let (width, height, blur) = options.resolved();

    // Fixed punch of 1.0: contrast shaping is the hash author's business.
    let pixels = blurhash_decode::decode(blurhash, width, height, 1.0)?;

    let w = width as usize;
    let h = height as usize;

    let mut background_images = Vec::with_capacity(w);
    let mut background_positions = Vec::with_capacity(w);

    for x in 0..w {
        let mut stops = Vec::with_capacity(h);
        for y in 0..h {
            stops.push(pixel_hex(&pixels, x, y, w));
        }

        background_images.push(format!("linear-gradient({})", stops.join(",")));
        let position = if x == 0 {
            "0 0".to_string()
        } else {
            format!("{} 0", as_percentage(x as f64 / (width - 1) as f64))
        };
        background_positions.push(position);
    }

    // To avoid blurry edges we use the average colour as a backdrop.
    let box_shadow = format!("0 0 0 10000px {}", average_color(blurhash)?);

    Ok(BlurhashCss {
        background_image: background_images.join(","),
        background_position: background_positions.join(","),
        background_size: format!("{} 100%", as_percentage(1.0 / width as f64)),
        background_repeat: "no-repeat".to_string(),
        box_shadow,
        filter: format!("blur({blur}px)"),
        clip_path: "inset(0)".to_string(),
    })
}

/// Read the pixel at `(x, y)` of a row-major RGBA grid as a compact hex
/// colour.
fn pixel_hex(pixels: &[u8], x: usize, y: usize, width: usize) -> String {
    let index = (y * width + x) * CHANNELS;
    compact_hex(pixels[index], pixels[index + 1], pixels[index + 2])
}
