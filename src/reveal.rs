//! One-shot fade-in reveal.
//!
//! DESIGN
//! ======
//! Every fade-in element is handed to a viewport observer. The first time
//! the observer reports it intersecting, the element gets the visible class
//! and is dropped from observation. Nothing ever removes the class, so the
//! transition observed → revealed → untracked only runs forward.
//!
//! The observer itself is a host capability. [`RevealHost`] is the narrow
//! seam over it, implemented by the DOM layer with `IntersectionObserver`
//! and by tests with a synchronous fake.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::error::FxError;

/// Viewport observation plus the class side effect on a target.
pub trait RevealHost {
    type Target;

    /// Start reporting intersections for `target`.
    fn observe(&mut self, target: &Self::Target);

    /// Stop reporting intersections for `target`.
    fn unobserve(&mut self, target: &Self::Target);

    /// Whether `target` already carries the visible class.
    fn is_visible(&self, target: &Self::Target) -> bool;

    /// Add the visible class to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Js`] if the class list rejects the change.
    fn mark_visible(&mut self, target: &Self::Target) -> Result<(), FxError>;
}

/// One observer report for one target.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection<T> {
    pub target: T,
    pub is_intersecting: bool,
}

impl<T> Intersection<T> {
    #[must_use]
    pub fn new(target: T, is_intersecting: bool) -> Self {
        Self { target, is_intersecting }
    }
}

/// Tracks how many elements were handed to the observer and how many have
/// been revealed so far.
#[derive(Debug, Default)]
pub struct RevealController {
    observed: usize,
    revealed: usize,
}

impl RevealController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every target with the host. Returns how many were added.
    pub fn attach<H: RevealHost>(&mut self, host: &mut H, targets: impl IntoIterator<Item = H::Target>) -> usize {
        let mut added = 0;
        for target in targets {
            host.observe(&target);
            added += 1;
        }
        self.observed += added;
        added
    }

    /// Process one observer callback. Returns how many targets were newly
    /// revealed by it.
    ///
    /// Non-intersecting entries stay observed. A target that is already
    /// visible is unobserved without touching its class again. If marking
    /// fails the target stays observed so a later callback can retry.
    pub fn handle<H: RevealHost>(
        &mut self,
        host: &mut H,
        entries: impl IntoIterator<Item = Intersection<H::Target>>,
    ) -> usize {
        let mut newly = 0;
        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }
            if host.is_visible(&entry.target) {
                host.unobserve(&entry.target);
                continue;
            }
            match host.mark_visible(&entry.target) {
                Ok(()) => {
                    host.unobserve(&entry.target);
                    newly += 1;
                }
                Err(err) => log::warn!("reveal: could not mark element visible ({err})"),
            }
        }
        self.revealed += newly;
        newly
    }

    /// Elements still waiting to scroll into view.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.observed.saturating_sub(self.revealed)
    }
}
