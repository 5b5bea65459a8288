//! Component binding state.
//!
//! A component becomes `Bound` once every element it needs has been found.
//! A failed lookup leaves it `Unbound` for the rest of the page session;
//! no listeners are registered for an unbound component.

#[cfg(test)]
#[path = "binding_test.rs"]
mod binding_test;

use crate::error::FxError;

#[derive(Debug)]
pub enum Binding<C> {
    Unbound,
    Bound(C),
}

/// Turn an optional lookup into a `MissingElement` error naming `what`.
///
/// # Errors
///
/// Returns [`FxError::MissingElement`] when `found` is `None`.
pub fn require<T>(found: Option<T>, what: &str) -> Result<T, FxError> {
    found.ok_or_else(|| FxError::MissingElement(what.to_owned()))
}

impl<C> Binding<C> {
    /// Turn a lookup result into a binding, logging why it failed.
    #[must_use]
    pub fn from_lookup(component: &str, lookup: Result<C, FxError>) -> Self {
        match lookup {
            Ok(inner) => {
                log::debug!("{component}: bound");
                Self::Bound(inner)
            }
            Err(err) => {
                if err.is_missing_element() {
                    log::debug!("{component}: not bound ({err})");
                } else {
                    log::warn!("{component}: not bound ({err})");
                }
                Self::Unbound
            }
        }
    }
}
