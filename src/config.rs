//! Page configuration: the markup contract plus numeric knobs.
//!
//! Every field has a default taken from [`crate::consts`], so the host page
//! only supplies what differs from the stock chapter template. JSON keys are
//! camelCase to match how the value is written in a `<script>` block.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    CHAPTER_CONTENT_SELECTOR, DECREASE_FONT_ID, DEFAULT_FONT_SIZE_PX, FADE_IN_CLASS, FONT_STEP_PX, INCREASE_FONT_ID,
    MIN_FONT_SIZE_PX, PROGRESS_BAR_ID, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, VISIBLE_CLASS,
};
use crate::error::FxError;

/// Console verbosity for the browser logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    #[must_use]
    pub fn to_level(self) -> log::Level {
        match self {
            Self::Error => log::Level::Error,
            Self::Warn => log::Level::Warn,
            Self::Info => log::Level::Info,
            Self::Debug => log::Level::Debug,
            Self::Trace => log::Level::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PageConfig {
    pub fade_in_class: String,
    pub visible_class: String,
    pub progress_bar_id: String,
    pub increase_font_id: String,
    pub decrease_font_id: String,
    pub content_selector: String,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub font_step_px: f64,
    pub min_font_size_px: f64,
    pub default_font_size_px: f64,
    pub log_level: LogLevel,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            fade_in_class: FADE_IN_CLASS.to_owned(),
            visible_class: VISIBLE_CLASS.to_owned(),
            progress_bar_id: PROGRESS_BAR_ID.to_owned(),
            increase_font_id: INCREASE_FONT_ID.to_owned(),
            decrease_font_id: DECREASE_FONT_ID.to_owned(),
            content_selector: CHAPTER_CONTENT_SELECTOR.to_owned(),
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_root_margin: REVEAL_ROOT_MARGIN.to_owned(),
            font_step_px: FONT_STEP_PX,
            min_font_size_px: MIN_FONT_SIZE_PX,
            default_font_size_px: DEFAULT_FONT_SIZE_PX,
            log_level: LogLevel::default(),
        }
    }
}

impl PageConfig {
    /// Parse a (possibly partial) JSON object and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Config`] for malformed JSON or unknown keys and
    /// [`FxError::InvalidConfig`] for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, FxError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that numeric knobs are usable and names are non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), FxError> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(invalid("revealThreshold must be within 0..=1"));
        }
        if !self.font_step_px.is_finite() || self.font_step_px <= 0.0 {
            return Err(invalid("fontStepPx must be a positive number"));
        }
        if !self.min_font_size_px.is_finite() || self.min_font_size_px <= 0.0 {
            return Err(invalid("minFontSizePx must be a positive number"));
        }
        if !self.default_font_size_px.is_finite() || self.default_font_size_px < self.min_font_size_px {
            return Err(invalid("defaultFontSizePx must be at least minFontSizePx"));
        }

        if !is_valid_root_margin(&self.reveal_root_margin) {
            return Err(invalid("revealRootMargin must be 1 to 4 lengths in px or %"));
        }

        let names = [
            ("fadeInClass", &self.fade_in_class),
            ("visibleClass", &self.visible_class),
            ("progressBarId", &self.progress_bar_id),
            ("increaseFontId", &self.increase_font_id),
            ("decreaseFontId", &self.decrease_font_id),
            ("contentSelector", &self.content_selector),
            ("revealRootMargin", &self.reveal_root_margin),
        ];
        if let Some((field, _)) = names.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(invalid(&format!("{field} must not be empty")));
        }
        Ok(())
    }

    /// CSS selector matching every fade-in element.
    #[must_use]
    pub fn fade_in_selector(&self) -> String {
        format!(".{}", self.fade_in_class)
    }
}

/// `IntersectionObserver` accepts one to four offsets, each in `px` or `%`,
/// and throws for anything else.
fn is_valid_root_margin(raw: &str) -> bool {
    let parts: Vec<&str> = raw.split_whitespace().collect();
    (1..=4).contains(&parts.len())
        && parts.iter().all(|part| {
            let number = part.strip_suffix("px").or_else(|| part.strip_suffix('%'));
            number.is_some_and(|n| n.parse::<f64>().is_ok_and(f64::is_finite))
        })
}

fn invalid(msg: &str) -> FxError {
    FxError::InvalidConfig(msg.to_owned())
}
