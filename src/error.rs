//! Error taxonomy for page effect setup.
//!
//! ERROR HANDLING
//! ==============
//! Only configuration errors reach the host page. Everything else is logged
//! where it happens and leaves the affected component unbound, so a missing
//! element or browser capability never stops the other components.

use wasm_bindgen::JsValue;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum FxError {
    #[error("required element missing: {0}")]
    MissingElement(String),
    #[error("intersection observer unavailable: {0}")]
    ObserverUnavailable(String),
    #[error("no global window")]
    NoWindow,
    #[error("no document on window")]
    NoDocument,
    #[error("dom call failed: {0}")]
    Js(String),
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl FxError {
    /// Whether this error means the component simply has nothing to bind to.
    #[must_use]
    pub fn is_missing_element(&self) -> bool {
        matches!(self, Self::MissingElement(_))
    }
}

/// Human-readable text for a thrown JS value.
#[must_use]
pub fn describe_js(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Wrap a thrown JS value as an [`FxError::Js`].
#[must_use]
pub fn js_error(value: &JsValue) -> FxError {
    FxError::Js(describe_js(value))
}

impl From<FxError> for JsValue {
    fn from(err: FxError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
