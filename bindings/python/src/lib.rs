use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Convert a `BlurhashError` into a Python `ValueError`.
fn to_py_err(e: blurhash_gradients::BlurhashError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// The CSS property values that together display a BlurHash.
///
/// Attributes use the camelCase CSS property spelling so the object can be
/// passed straight to JS-facing template code.
#[pyclass(name = "BlurhashCss", frozen)]
pub struct BlurhashCss {
    #[pyo3(get, name = "backgroundImage")]
    background_image: String,
    #[pyo3(get, name = "backgroundPosition")]
    background_position: String,
    #[pyo3(get, name = "backgroundSize")]
    background_size: String,
    #[pyo3(get, name = "backgroundRepeat")]
    background_repeat: String,
    #[pyo3(get, name = "boxShadow")]
    box_shadow: String,
    #[pyo3(get)]
    filter: String,
    #[pyo3(get, name = "clipPath")]
    clip_path: String,
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
/// Args:
///     blurhash: The BlurHash string.
///     width: Grid columns, one gradient layer per column (default 8).
///     height: Grid rows, one colour stop per row (default 8).
///     blur: Blur filter radius in pixels (default 20).
///
/// Returns:
///     A BlurhashCss object of CSS property values.
#[pyfunction]
#[pyo3(signature = (blurhash, width = None, height = None, blur = None))]
fn as_gradients(
    blurhash: &str,
    width: Option<u32>,
    height: Option<u32>,
    blur: Option<u32>,
) -> PyResult<BlurhashCss> {
    let options = blurhash_gradients::GradientOptions { width, height, blur };
    blurhash_gradients::as_gradients(blurhash, options)
        .map(BlurhashCss::from)
        .map_err(to_py_err)
}

/// Extract a BlurHash's embedded average colour.
///
/// Args:
///     blurhash: The BlurHash string.
///
/// Returns:
///     A compact hex colour string like "#999".
#[pyfunction]
fn average_color(blurhash: &str) -> PyResult<String> {
    blurhash_gradients::color::average_color(blurhash).map_err(to_py_err)
}

#[pymodule]
#[pyo3(name = "blurhash_gradients")]
fn blurhash_gradients_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<BlurhashCss>()?;
    m.add_function(wrap_pyfunction!(as_gradients, m)?)?;
    m.add_function(wrap_pyfunction!(average_color, m)?)?;
    Ok(())
}
