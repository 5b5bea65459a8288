use std::collections::BTreeSet;

use super::*;

// =============================================================
// Helpers
// =============================================================

/// Synchronous stand-in for a viewport observer. Targets are plain ids.
#[derive(Default)]
struct FakeHost {
    observed: BTreeSet<u32>,
    visible: BTreeSet<u32>,
    mark_calls: Vec<u32>,
    fail_marks: bool,
}

impl RevealHost for FakeHost {
    type Target = u32;

    fn observe(&mut self, target: &u32) {
        self.observed.insert(*target);
    }

    fn unobserve(&mut self, target: &u32) {
        self.observed.remove(target);
    }

    fn is_visible(&self, target: &u32) -> bool {
        self.visible.contains(target)
    }

    fn mark_visible(&mut self, target: &u32) -> Result<(), FxError> {
        self.mark_calls.push(*target);
        if self.fail_marks {
            return Err(FxError::Js("classList rejected".into()));
        }
        self.visible.insert(*target);
        Ok(())
    }
}

impl FakeHost {
    /// Report intersections only for targets still observed, the way a real
    /// observer does.
    fn deliver(&mut self, ctl: &mut RevealController, entries: &[(u32, bool)]) -> usize {
        let live: Vec<_> = entries
            .iter()
            .filter(|(id, _)| self.observed.contains(id))
            .map(|&(id, hit)| Intersection::new(id, hit))
            .collect();
        ctl.handle(self, live)
    }
}

fn attached(ids: &[u32]) -> (FakeHost, RevealController) {
    let mut host = FakeHost::default();
    let mut ctl = RevealController::new();
    ctl.attach(&mut host, ids.iter().copied());
    (host, ctl)
}

// =============================================================
// Attach
// =============================================================

#[test]
fn attach_observes_every_target() {
    let (host, ctl) = attached(&[1, 2, 3]);
    assert_eq!(host.observed, BTreeSet::from([1, 2, 3]));
    assert_eq!(ctl.observed, 3);
    assert_eq!(ctl.pending(), 3);
}

#[test]
fn attach_with_no_targets_is_a_no_op() {
    let (host, ctl) = attached(&[]);
    assert!(host.observed.is_empty());
    assert_eq!(ctl.observed, 0);
}

#[test]
fn targets_start_without_visible_marker() {
    let (host, _) = attached(&[1, 2]);
    assert!(!host.is_visible(&1));
    assert!(!host.is_visible(&2));
}

// =============================================================
// Intersections
// =============================================================

#[test]
fn intersecting_target_is_revealed_and_unobserved() {
    let (mut host, mut ctl) = attached(&[1, 2]);
    let newly = host.deliver(&mut ctl, &[(1, true)]);
    assert_eq!(newly, 1);
    assert!(host.is_visible(&1));
    assert!(!host.observed.contains(&1));
    assert!(host.observed.contains(&2));
    assert_eq!(ctl.revealed, 1);
    assert_eq!(ctl.pending(), 1);
}

#[test]
fn non_intersecting_target_stays_observed() {
    let (mut host, mut ctl) = attached(&[1]);
    let newly = host.deliver(&mut ctl, &[(1, false)]);
    assert_eq!(newly, 0);
    assert!(!host.is_visible(&1));
    assert!(host.observed.contains(&1));
}

#[test]
fn mixed_batch_only_reveals_intersecting_entries() {
    let (mut host, mut ctl) = attached(&[1, 2, 3]);
    let newly = host.deliver(&mut ctl, &[(1, true), (2, false), (3, true)]);
    assert_eq!(newly, 2);
    assert_eq!(host.visible, BTreeSet::from([1, 3]));
    assert_eq!(host.observed, BTreeSet::from([2]));
}

#[test]
fn later_callbacks_do_not_touch_revealed_target() {
    let (mut host, mut ctl) = attached(&[1]);
    host.deliver(&mut ctl, &[(1, true)]);
    host.deliver(&mut ctl, &[(1, true)]);
    host.deliver(&mut ctl, &[(1, false)]);
    assert_eq!(host.mark_calls, vec![1]);
    assert!(host.is_visible(&1));
    assert_eq!(ctl.revealed, 1);
}

#[test]
fn stray_report_for_visible_target_does_not_mark_twice() {
    let (mut host, mut ctl) = attached(&[1]);
    ctl.handle(&mut host, [Intersection::new(1, true)]);
    // Bypass the observed filter, as a misbehaving host might.
    let newly = ctl.handle(&mut host, [Intersection::new(1, true)]);
    assert_eq!(newly, 0);
    assert_eq!(host.mark_calls, vec![1]);
    assert_eq!(ctl.revealed, 1);
}

#[test]
fn target_visible_before_first_report_is_only_unobserved() {
    let (mut host, mut ctl) = attached(&[1]);
    host.visible.insert(1);
    let newly = host.deliver(&mut ctl, &[(1, true)]);
    assert_eq!(newly, 0);
    assert!(host.mark_calls.is_empty());
    assert!(!host.observed.contains(&1));
}

#[test]
fn failed_mark_keeps_target_observed_for_retry() {
    let (mut host, mut ctl) = attached(&[1]);
    host.fail_marks = true;
    assert_eq!(host.deliver(&mut ctl, &[(1, true)]), 0);
    assert!(host.observed.contains(&1));

    host.fail_marks = false;
    assert_eq!(host.deliver(&mut ctl, &[(1, true)]), 1);
    assert!(host.is_visible(&1));
    assert!(!host.observed.contains(&1));
}
