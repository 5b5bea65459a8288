//! Chapter font size adjuster.
//!
//! The increase/decrease buttons step the content container's font size by
//! a fixed amount. The baseline is the container's computed size, read the
//! first time either button is pressed. Sizes are floored but unbounded
//! above, and nothing is remembered across page loads.

#[cfg(test)]
#[path = "font_size_test.rs"]
mod font_size_test;

use crate::binding::{Binding, require};
use crate::config::PageConfig;
use crate::consts::{DEFAULT_FONT_SIZE_PX, FONT_STEP_PX, MIN_FONT_SIZE_PX};
use crate::error::FxError;
use crate::style::{StyleTarget, format_px, parse_px};

/// Step, floor and fallback baseline, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizeRules {
    pub step_px: f64,
    pub min_px: f64,
    pub fallback_px: f64,
}

impl Default for FontSizeRules {
    fn default() -> Self {
        Self { step_px: FONT_STEP_PX, min_px: MIN_FONT_SIZE_PX, fallback_px: DEFAULT_FONT_SIZE_PX }
    }
}

impl From<&PageConfig> for FontSizeRules {
    fn from(cfg: &PageConfig) -> Self {
        Self { step_px: cfg.font_step_px, min_px: cfg.min_font_size_px, fallback_px: cfg.default_font_size_px }
    }
}

/// Which button was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontChange {
    Increase,
    Decrease,
}

/// Everything the adjuster needs from the page: two buttons and the
/// container whose size they change.
#[derive(Debug)]
pub struct FontControls<B, T> {
    pub increase: B,
    pub decrease: B,
    pub adjuster: FontSizeAdjuster<T>,
}

/// Bind the font size buttons. Unbound unless all three elements were
/// found, in which case no click listener is registered.
#[must_use]
pub fn bind_font_size<B, T: StyleTarget>(
    increase: Option<B>,
    decrease: Option<B>,
    content: Option<T>,
    cfg: &PageConfig,
) -> Binding<FontControls<B, T>> {
    Binding::from_lookup("font size", find_controls(increase, decrease, content, cfg))
}

fn find_controls<B, T: StyleTarget>(
    increase: Option<B>,
    decrease: Option<B>,
    content: Option<T>,
    cfg: &PageConfig,
) -> Result<FontControls<B, T>, FxError> {
    Ok(FontControls {
        increase: require(increase, &format!("#{}", cfg.increase_font_id))?,
        decrease: require(decrease, &format!("#{}", cfg.decrease_font_id))?,
        adjuster: FontSizeAdjuster::new(require(content, &cfg.content_selector)?, FontSizeRules::from(cfg)),
    })
}

/// A bound adjuster owning the tracked size of one content container.
#[derive(Debug)]
pub struct FontSizeAdjuster<T> {
    content: T,
    rules: FontSizeRules,
    current_px: Option<f64>,
}

impl<T: StyleTarget> FontSizeAdjuster<T> {
    #[must_use]
    pub fn new(content: T, rules: FontSizeRules) -> Self {
        Self { content, rules, current_px: None }
    }

    /// Apply one button press. Returns the new size in pixels.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Js`] if the style write is rejected. The tracked
    /// size has already moved by then.
    pub fn apply(&mut self, change: FontChange) -> Result<f64, FxError> {
        let base = self.baseline();
        let next = match change {
            FontChange::Increase => base + self.rules.step_px,
            FontChange::Decrease => (base - self.rules.step_px).max(self.rules.min_px),
        };
        self.current_px = Some(next);
        self.content.set_style("font-size", &format_px(next))?;
        Ok(next)
    }

    fn baseline(&mut self) -> f64 {
        if let Some(px) = self.current_px {
            return px;
        }
        let computed = self.content.computed_style("font-size");
        let px = computed.as_deref().and_then(parse_px).unwrap_or_else(|| {
            log::warn!(
                "font size: computed font-size {computed:?} unreadable, using {}px",
                self.rules.fallback_px
            );
            self.rules.fallback_px
        });
        self.current_px = Some(px);
        px
    }
}
