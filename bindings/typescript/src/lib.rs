use napi::bindgen_prelude::*;
use napi::Task;
use napi_derive::napi;

/// Options for blurhashAsGradients. Omitted fields use their defaults.
#[napi(object)]
#[derive(Default, Clone, Copy)]
pub struct GradientOptions {
    /// Grid columns, one gradient layer per column (default 8).
    pub width: Option<u32>,
    /// Grid rows, one colour stop per row (default 8).
    pub height: Option<u32>,
    /// Blur filter radius in pixels (default 20).
    pub blur: Option<u32>,
}

impl From<GradientOptions> for blurhash_gradients::GradientOptions {
    fn from(options: GradientOptions) -> Self {
        Self {
            width: options.width,
            height: options.height,
            blur: options.blur,
        }
    }
}

/// The CSS property values that together display a BlurHash.
#[napi(object)]
pub struct BlurhashCss {
    pub background_image: String,
    pub background_position: String,
    pub background_size: String,
    pub background_repeat: String,
    pub box_shadow: String,
    pub filter: String,
    pub clip_path: String,
}

impl From<blurhash_gradients::BlurhashCss> for BlurhashCss {
    fn from(css: blurhash_gradients::BlurhashCss) -> Self {
        Self {
            background_image: css.background_image,
            background_position: css.background_position,
            background_size: css.background_size,
            background_repeat: css.background_repeat,
            box_shadow: css.box_shadow,
            filter: css.filter,
            clip_path: css.clip_path,
        }
    }
}

/// Approximate the appearance of a BlurHash using CSS gradients.
///
/// @param blurhash - The BlurHash string.
/// @param options - Optional grid resolution and blur radius.
/// @returns An object of camelCase CSS properties to apply to one element.
#[napi]
pub fn blurhash_as_gradients(
    blurhash: String,
    options: Option<GradientOptions>,
) -> Result<BlurhashCss> {
    let opts = options.unwrap_or_default();
    blurhash_gradients::as_gradients(&blurhash, opts.into())
        .map(BlurhashCss::from)
        .map_err(|e| Error::from_reason(e.to_string()))
}

/// Extract a BlurHash's embedded average colour.
///
/// @param blurhash - The BlurHash string.
/// @returns A compact hex colour string like "#999".
#[napi]
pub fn average_color(blurhash: String) -> Result<String> {
    blurhash_gradients::color::average_color(&blurhash)
        .map_err(|e| Error::from_reason(e.to_string()))
}

// --- Async version (runs on the libuv thread pool) ---

pub struct GradientsTask {
    blurhash: String,
    options: blurhash_gradients::GradientOptions,
}

impl Task for GradientsTask {
    type Output = blurhash_gradients::BlurhashCss;
    type JsValue = BlurhashCss;

    fn compute(&mut self) -> Result<Self::Output> {
        blurhash_gradients::as_gradients(&self.blurhash, self.options)
            .map_err(|e| Error::from_reason(e.to_string()))
    }

    fn resolve(&mut self, _env: Env, output: Self::Output) -> Result<Self::JsValue> {
        Ok(output.into())
    }
}

/// Async version of blurhashAsGradients that runs on the libuv thread pool.
/// Returns a Promise<BlurhashCss>.
///
/// @param blurhash - The BlurHash string.
/// @param options - Optional grid resolution and blur radius.
/// @returns A Promise resolving to the CSS property object.
#[napi]
pub fn blurhash_as_gradients_async(
    blurhash: String,
    options: Option<GradientOptions>,
) -> AsyncTask<GradientsTask> {
    let opts = options.unwrap_or_default();
    AsyncTask::new(GradientsTask {
        blurhash,
        options: opts.into(),
    })
}
