//! # blurhash-decode
//!
//! Decoding primitives for [BlurHash](https://blurha.sh/) strings.
//!
//! This crate is the decoding backend of the `blurhash-gradients` workspace.
//! It exposes exactly the two capabilities the gradient synthesizer consumes:
//!
//! * [`decode`] — turn a BlurHash string into an RGBA pixel grid of the
//!   requested resolution (row-major, 4 bytes per pixel, alpha always 255).
//! * [`base83::decode`] — decode a base83 substring into an integer, used to
//!   read the full-precision average colour embedded in every hash.
//!
//! There is no encoder here; the workspace only ever turns hashes into CSS.
//!
//! ## Quick Start
//!
//! ```
//! use blurhash_decode::decode;
//!
//! let pixels = decode("LEHV6nWB2yk8pyo0adR*.7kCMdnj", 8, 8, 1.0).unwrap();
//! assert_eq!(pixels.len(), 8 * 8 * 4);
//! ```

pub mod base83;
pub mod color;
pub mod error;

mod decode_impl;

// Re-export primary items at crate root.
pub use decode_impl::decode;
pub use error::BlurhashError;
