//! # blurhash-gradients
//!
//! Approximate a [BlurHash](https://blurha.sh/) with pure CSS.
//!
//! A BlurHash is a compact placeholder for an image. This crate decodes one
//! into a small pixel grid and synthesizes CSS property values — layered
//! `linear-gradient` backgrounds, positioning, sizing, a blur filter, a clip
//! path and an average-colour backdrop — that reproduce the visual
//! impression of that grid in any CSS engine. No `<img>`, no canvas, no
//! network fetch at render time.
//!
//! The higher the requested resolution, the larger the resulting CSS. The
//! defaults (8x8 grid, 20px blur) produce roughly 650 bytes of property text.
//!
//! ## Quick Start
//!
//! ```
//! use blurhash_gradients::{as_gradients, GradientOptions};
//!
//! let css = as_gradients("LEHV6nWB2yk8pyo0adR*.7kCMdnj", GradientOptions::default()).unwrap();
//!
//! assert!(css.background_image.starts_with("linear-gradient("));
//! assert_eq!(css.background_size, "12.5% 100%");
//! assert_eq!(css.filter, "blur(20px)");
//! assert_eq!(css.clip_path, "inset(0)");
//! ```

pub mod color;

mod css;
mod gradient;

// Re-export primary items at crate root.
pub use css::BlurhashCss;
pub use gradient::{as_gradients, GradientOptions};

// Decoder errors surface unmodified, so callers only need one error type.
pub use blurhash_decode::BlurhashError;
