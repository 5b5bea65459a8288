//! Reading-progress bar.
//!
//! On every scroll the bar's width is set to the share of the scrollable
//! range already passed. Pages without overflow and transient over-scroll
//! (resize races, rubber-banding) are pinned to `0%..=100%` so the style
//! string is always a finite percentage.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use crate::binding::{Binding, require};
use crate::consts::MAX_PROGRESS_PERCENT;
use crate::error::FxError;
use crate::style::{StyleTarget, format_percent};

/// Scroll geometry of one document root, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    #[must_use]
    pub fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self { scroll_top, scroll_height, client_height }
    }

    /// Merge two roots field by field, taking `fallback` wherever `self`
    /// reads zero or NaN.
    ///
    /// Standards-mode pages report on `documentElement`, quirks-mode pages
    /// on `body`; the other root reads zero.
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        Self {
            scroll_top: pick(self.scroll_top, fallback.scroll_top),
            scroll_height: pick(self.scroll_height, fallback.scroll_height),
            client_height: pick(self.client_height, fallback.client_height),
        }
    }

    /// Distance the page can scroll, `scroll_height - client_height`.
    #[must_use]
    pub fn scrollable_range(&self) -> f64 {
        self.scroll_height - self.client_height
    }

    /// Share of the scrollable range passed, clamped to `0..=100`.
    ///
    /// Returns `0` when there is nothing to scroll or any input is
    /// non-finite.
    #[must_use]
    pub fn percent(&self) -> f64 {
        let range = self.scrollable_range();
        if !range.is_finite() || range <= 0.0 || !self.scroll_top.is_finite() {
            return 0.0;
        }
        (self.scroll_top / range * MAX_PROGRESS_PERCENT).clamp(0.0, MAX_PROGRESS_PERCENT)
    }
}

fn pick(primary: f64, fallback: f64) -> f64 {
    if primary == 0.0 || primary.is_nan() { fallback } else { primary }
}

/// Bind the progress bar found under `id`. Unbound when `bar` is `None`,
/// in which case no scroll listener is registered.
#[must_use]
pub fn bind_progress<T: StyleTarget>(bar: Option<T>, id: &str) -> Binding<ProgressIndicator<T>> {
    Binding::from_lookup("progress", require(bar, &format!("#{id}")).map(ProgressIndicator::new))
}

/// A bound progress bar.
#[derive(Debug)]
pub struct ProgressIndicator<T> {
    bar: T,
}

impl<T: StyleTarget> ProgressIndicator<T> {
    #[must_use]
    pub fn new(bar: T) -> Self {
        Self { bar }
    }

    /// Recompute and apply the bar width. Returns the width written.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Js`] if the style write is rejected.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> Result<String, FxError> {
        let width = format_percent(metrics.percent());
        self.bar.set_style("width", &width)?;
        Ok(width)
    }
}
