//! The CSS property bundle and shared string formatting.

/// The CSS property values that together display a BlurHash.
///
/// Apply every field to the same element. `background_image` and
/// `background_position` are order-correlated comma lists with one entry per
/// grid column; `box_shadow` backs the element with the hash's average
/// colour so the blur filter does not produce washed-out edges, and
/// `clip_path` confines the blur back inside the element's box.
///
/// With the `serde` feature enabled the struct serializes with camelCase
/// field names (`backgroundImage`, ...), matching the JS/CSSOM property
/// spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BlurhashCss {
    /// Comma-joined `linear-gradient(...)` layers, one per column.
    pub background_image: String,
    /// Comma-joined `<x%> 0` entries, one per column, same order as the layers.
    pub background_position: String,
    /// `<pct>% 100%` — each layer covers one vertical strip.
    pub background_size: String,
    /// Always `no-repeat`.
    pub background_repeat: String,
    /// `0 0 0 10000px <#rgb>` — average-colour backdrop.
    pub box_shadow: String,
    /// `blur(<N>px)`.
    pub filter: String,
    /// Always `inset(0)`.
    pub clip_path: String,
}

/// Format a ratio as a CSS percentage with at most one decimal place.
///
/// Whole percentages render without decimals; anything else renders with
/// exactly one decimal digit, rounded half away from zero. The digit count
/// is part of the output contract (consumers snapshot the CSS strings), so
/// the tenth is rounded in integer arithmetic rather than with `{:.1}`,
/// which would round half to even.
pub(crate) fn as_percentage(ratio: f64) -> String {
    let percentage = ratio * 100.0;
    if percentage == percentage.round() {
        return format!("{percentage}%");
    }
    let tenths = (percentage * 10.0).round() as i64;
    format!("{}.{}%", tenths / 10, (tenths % 10).abs())
}
