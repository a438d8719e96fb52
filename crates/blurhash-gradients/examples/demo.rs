//! blurhash-gradients demo - turn a hash into CSS
//!
//! Run with: cargo run --example demo

use blurhash_gradients::{as_gradients, GradientOptions};

fn main() {
    println!("=== blurhash-gradients Demo ===\n");

    let hash = "LEHV6nWB2yk8pyo0adR*.7kCMdnj";
    println!("1. Input BlurHash: {hash}\n");

    let css = as_gradients(hash, GradientOptions::default()).expect("valid blurhash");

    println!("2. CSS for an 8x8 grid with a 20px blur:\n");
    println!(".placeholder {{");
    println!("  background-image: {};", css.background_image);
    println!("  background-position: {};", css.background_position);
    println!("  background-size: {};", css.background_size);
    println!("  background-repeat: {};", css.background_repeat);
    println!("  box-shadow: {};", css.box_shadow);
    println!("  filter: {};", css.filter);
    println!("  clip-path: {};", css.clip_path);
    println!("}}\n");

    // A coarser grid makes for smaller CSS.
    let coarse = as_gradients(
        hash,
        GradientOptions {
            width: Some(4),
            height: Some(4),
            blur: Some(40),
        },
    )
    .expect("valid blurhash");

    println!(
        "3. The same hash at 4x4 is {} bytes of background-image instead of {}",
        coarse.background_image.len(),
        css.background_image.len()
    );
}
