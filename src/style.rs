//! Inline style seam and CSS value helpers.
//!
//! Components never touch browser style objects directly. They write
//! through [`StyleTarget`], which the DOM layer implements for
//! `HtmlElement` and tests implement with a recording fake.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use crate::error::FxError;

/// An element whose inline style can be written and computed style read.
pub trait StyleTarget {
    /// Set an inline style property, e.g. `("width", "50%")`.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Js`] if the host rejects the write.
    fn set_style(&self, property: &str, value: &str) -> Result<(), FxError>;

    /// Resolved value of a property as rendered, if the host can report it.
    fn computed_style(&self, property: &str) -> Option<String>;
}

/// Format a percentage as a CSS length, e.g. `50.0` → `"50%"`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{}%", normalize_zero(value))
}

/// Format a pixel size as a CSS length, e.g. `18.0` → `"18px"`.
#[must_use]
pub fn format_px(value: f64) -> String {
    format!("{}px", normalize_zero(value))
}

/// Read the leading number of a CSS value the way `parseFloat` does.
///
/// `"16px"` → `16.0`, `" 14.5rem"` → `14.5`, `"px"` → `None`. Non-finite
/// results are rejected.
#[must_use]
pub fn parse_px(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let numeric_len = trimmed
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E')))
        .map_or(trimmed.len(), |(i, _)| i);
    let candidate = &trimmed[..numeric_len];

    for end in (1..=candidate.len()).rev() {
        if let Ok(value) = candidate[..end].parse::<f64>() {
            return value.is_finite().then_some(value);
        }
    }
    None
}

// `-0` would otherwise render as "-0%".
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}
