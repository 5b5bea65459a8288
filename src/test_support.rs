//! Fakes shared by unit tests.

use std::cell::RefCell;

use crate::error::FxError;
use crate::style::StyleTarget;

/// Records every inline style write and serves a fixed computed style.
#[derive(Default)]
pub struct RecordingStyle {
    pub writes: RefCell<Vec<(String, String)>>,
    pub computed_font_size: Option<String>,
    pub reject_writes: bool,
}

impl RecordingStyle {
    pub fn with_font_size(value: &str) -> Self {
        Self { computed_font_size: Some(value.to_owned()), ..Self::default() }
    }

    /// Values written to `property`, oldest first.
    pub fn values(&self, property: &str) -> Vec<String> {
        self.writes
            .borrow()
            .iter()
            .filter(|(p, _)| p == property)
            .map(|(_, v)| v.clone())
            .collect()
    }

    pub fn last(&self, property: &str) -> Option<String> {
        self.values(property).pop()
    }
}

impl StyleTarget for RecordingStyle {
    fn set_style(&self, property: &str, value: &str) -> Result<(), FxError> {
        if self.reject_writes {
            return Err(FxError::Js(format!("cannot set {property}")));
        }
        self.writes.borrow_mut().push((property.to_owned(), value.to_owned()));
        Ok(())
    }

    fn computed_style(&self, property: &str) -> Option<String> {
        match property {
            "font-size" => self.computed_font_size.clone(),
            _ => None,
        }
    }
}
