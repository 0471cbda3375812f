//! Spring-driven transition between the checked and unchecked states.
//!
//! Three scalars move together: the thumb offset, the reveal circle center,
//! and the reveal progress. Retargeting keeps each spring's current value
//! and velocity, so reversing mid-flight never jumps.

use crate::defaults::{SwitchDefaults, SwitchGeometry};
use fancy_switch_core::{Spring, SpringConfig};
use serde::Serialize;

/// Snapshot of the animated values for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransitionValues {
    /// Thumb left edge, from the track's left edge
    pub thumb_offset: f32,
    /// Reveal circle center x, from the track's left edge
    pub reveal_offset: f32,
    /// Reveal circle growth in [0, 1]
    pub reveal_progress: f32,
}

impl TransitionValues {
    /// Values at rest in a state.
    #[must_use]
    pub fn at_rest(checked: bool, geometry: &SwitchGeometry) -> Self {
        Self {
            thumb_offset: geometry.thumb_target(checked),
            reveal_offset: geometry.reveal_target(checked),
            reveal_progress: SwitchGeometry::progress_target(checked),
        }
    }
}

/// The three springs behind a switch.
#[derive(Debug, Clone)]
pub struct SwitchTransition {
    checked: bool,
    geometry: SwitchGeometry,
    thumb_offset: Spring,
    reveal_offset: Spring,
    reveal_progress: Spring,
}

impl SwitchTransition {
    /// Transition resting in `checked`, with the default spring.
    #[must_use]
    pub fn new(checked: bool, geometry: SwitchGeometry) -> Self {
        Self::with_spring(checked, geometry, SwitchDefaults::spring())
    }

    /// Transition resting in `checked`, driven by `spring`.
    ///
    /// The spring's precision is replaced per property: offsets settle at
    /// [`SwitchDefaults::OFFSET_PRECISION`], progress at
    /// [`SwitchDefaults::PROGRESS_PRECISION`].
    #[must_use]
    pub fn with_spring(checked: bool, geometry: SwitchGeometry, spring: SpringConfig) -> Self {
        let rest = TransitionValues::at_rest(checked, &geometry);
        let offsets = spring.with_precision(SwitchDefaults::OFFSET_PRECISION);
        let progress = spring.with_precision(SwitchDefaults::PROGRESS_PRECISION);
        Self {
            checked,
            geometry,
            thumb_offset: Spring::new(f64::from(rest.thumb_offset)).with_config(offsets),
            reveal_offset: Spring::new(f64::from(rest.reveal_offset)).with_config(offsets),
            reveal_progress: Spring::new(f64::from(rest.reveal_progress)).with_config(progress),
        }
    }

    /// State the springs are heading to.
    #[must_use]
    pub const fn target(&self) -> bool {
        self.checked
    }

    /// Geometry the targets are computed from.
    #[must_use]
    pub const fn geometry(&self) -> &SwitchGeometry {
        &self.geometry
    }

    /// Redirect all three springs toward `checked`.
    ///
    /// Returns `true` if the target changed.
    pub fn set_target(&mut self, checked: bool) -> bool {
        if checked == self.checked {
            return false;
        }
        self.checked = checked;
        let rest = TransitionValues::at_rest(checked, &self.geometry);
        self.thumb_offset.set_target(f64::from(rest.thumb_offset));
        self.reveal_offset.set_target(f64::from(rest.reveal_offset));
        self.reveal_progress
            .set_target(f64::from(rest.reveal_progress));
        true
    }

    /// Jump to rest in `checked` without animating.
    pub fn snap_to(&mut self, checked: bool) {
        self.checked = checked;
        let rest = TransitionValues::at_rest(checked, &self.geometry);
        self.thumb_offset.set_immediate(f64::from(rest.thumb_offset));
        self.reveal_offset.set_immediate(f64::from(rest.reveal_offset));
        self.reveal_progress
            .set_immediate(f64::from(rest.reveal_progress));
    }

    /// Advance all springs by `dt` seconds. Returns `true` while moving.
    pub fn advance(&mut self, dt: f64) -> bool {
        self.thumb_offset.update(dt);
        self.reveal_offset.update(dt);
        self.reveal_progress.update(dt);
        !self.is_settled()
    }

    /// Whether every spring has come to rest.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        self.thumb_offset.at_rest && self.reveal_offset.at_rest && self.reveal_progress.at_rest
    }

    /// Current values.
    #[must_use]
    pub fn values(&self) -> TransitionValues {
        TransitionValues {
            thumb_offset: self.thumb_offset.value as f32,
            reveal_offset: self.reveal_offset.value as f32,
            reveal_progress: self.reveal_progress.value as f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn settle(t: &mut SwitchTransition) -> Vec<TransitionValues> {
        let mut frames = vec![t.values()];
        for _ in 0..600 {
            if !t.advance(FRAME) {
                frames.push(t.values());
                break;
            }
            frames.push(t.values());
        }
        frames
    }

    #[test]
    fn test_new_rests_at_state() {
        let g = SwitchGeometry::default();
        let t = SwitchTransition::new(true, g);
        assert!(t.is_settled());
        assert_eq!(t.values(), TransitionValues::at_rest(true, &g));
        assert!(t.target());
    }

    #[test]
    fn test_set_target_same_state_is_noop() {
        let mut t = SwitchTransition::new(false, SwitchGeometry::default());
        assert!(!t.set_target(false));
        assert!(t.is_settled());
    }

    #[test]
    fn test_unchecked_to_checked_settles_exactly() {
        let g = SwitchGeometry::default();
        let mut t = SwitchTransition::new(false, g);
        assert!(t.set_target(true));
        assert!(!t.is_settled());

        let frames = settle(&mut t);
        assert!(t.is_settled());
        assert!(frames.len() < 600);
        let last = t.values();
        assert_eq!(last.thumb_offset, g.max_offset());
        assert_eq!(last.reveal_offset, g.max_reveal_center());
        assert_eq!(last.reveal_progress, 1.0);
    }

    #[test]
    fn test_offsets_monotonic_toward_target() {
        let g = SwitchGeometry::default();
        let mut t = SwitchTransition::new(false, g);
        t.set_target(true);
        let frames = settle(&mut t);
        for pair in frames.windows(2) {
            assert!(pair[1].thumb_offset >= pair[0].thumb_offset);
            assert!(pair[1].reveal_offset >= pair[0].reveal_offset);
            assert!(pair[1].reveal_progress >= pair[0].reveal_progress);
            assert!(pair[1].thumb_offset <= g.max_offset());
            assert!(pair[1].reveal_progress <= 1.0);
        }
    }

    #[test]
    fn test_reversal_has_no_jump() {
        let g = SwitchGeometry::default();
        let mut t = SwitchTransition::new(false, g);
        t.set_target(true);
        for _ in 0..4 {
            t.advance(FRAME);
        }
        let mid = t.values();
        assert!(mid.thumb_offset > g.min_offset() && mid.thumb_offset < g.max_offset());

        t.set_target(false);
        assert_eq!(t.values(), mid);
        t.advance(FRAME);
        let next = t.values();
        assert!((next.thumb_offset - mid.thumb_offset).abs() < 4.0);

        settle(&mut t);
        assert_eq!(t.values(), TransitionValues::at_rest(false, &g));
    }

    #[test]
    fn test_triple_reversal_stays_in_track() {
        let g = SwitchGeometry::default();
        let in_track = |v: TransitionValues| {
            (g.min_offset()..=g.max_offset()).contains(&v.thumb_offset)
                && (g.min_reveal_center()..=g.max_reveal_center()).contains(&v.reveal_offset)
        };
        for a in 0..20 {
            for b in 0..20 {
                for c in 0..20 {
                    let mut t = SwitchTransition::new(false, g);
                    let mut checked = false;
                    for frames in [a, b, c] {
                        checked = !checked;
                        t.set_target(checked);
                        for _ in 0..frames {
                            t.advance(FRAME);
                            assert!(in_track(t.values()), "{a}/{b}/{c}: {:?}", t.values());
                        }
                    }
                    for v in settle(&mut t) {
                        assert!(in_track(v), "{a}/{b}/{c}: {v:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_snap_to() {
        let g = SwitchGeometry::default();
        let mut t = SwitchTransition::new(false, g);
        t.set_target(true);
        t.advance(FRAME);
        t.snap_to(false);
        assert!(t.is_settled());
        assert!(!t.target());
        assert_eq!(t.values(), TransitionValues::at_rest(false, &g));
    }

    proptest! {
        #[test]
        fn prop_values_stay_in_track(toggles in proptest::collection::vec(0usize..20, 1..6)) {
            let g = SwitchGeometry::default();
            let mut t = SwitchTransition::new(false, g);
            let mut checked = false;
            for frames in toggles {
                checked = !checked;
                t.set_target(checked);
                for _ in 0..frames {
                    t.advance(FRAME);
                    let v = t.values();
                    prop_assert!(v.thumb_offset >= g.min_offset());
                    prop_assert!(v.thumb_offset <= g.max_offset());
                    prop_assert!(v.reveal_offset >= g.min_reveal_center());
                    prop_assert!(v.reveal_offset <= g.max_reveal_center());
                }
            }
            settle(&mut t);
            prop_assert_eq!(t.values(), TransitionValues::at_rest(checked, &g));
        }
    }
}
