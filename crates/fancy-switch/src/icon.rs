//! Thumb icon that morphs between a cross and a check mark.
//!
//! The icon keeps its own tween, keyed off `at_end` (the checked flag), so
//! its timing is independent of the track springs.

use crate::defaults::SwitchDefaults;
use fancy_switch_core::{Canvas, Color, EasedValue, Easing, LineCap, Point, Rect, StrokeStyle};

/// Glyph strokes in a 16×16 box, as (start, end) pairs.
const CROSS: [[(f32, f32); 2]; 2] = [[(4.0, 4.0), (12.0, 12.0)], [(12.0, 4.0), (4.0, 12.0)]];
const CHECK: [[(f32, f32); 2]; 2] = [[(3.0, 8.5), (6.5, 12.0)], [(6.5, 12.0), (13.0, 4.5)]];
const GLYPH_BOX: f32 = 16.0;
const STROKE_WIDTH: f32 = 2.0;

/// Animated cross/check icon.
#[derive(Debug, Clone)]
pub struct AnimatedIcon {
    at_end: bool,
    progress: EasedValue,
    duration: f64,
}

impl AnimatedIcon {
    /// Icon resting at the glyph for `at_end`.
    #[must_use]
    pub fn new(at_end: bool) -> Self {
        Self {
            at_end,
            progress: EasedValue::settled(if at_end { 1.0 } else { 0.0 })
                .with_easing(Easing::CubicInOut),
            duration: SwitchDefaults::ICON_DURATION,
        }
    }

    /// Set the full morph duration in seconds.
    #[must_use]
    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds.max(0.0);
        self
    }

    /// Set the morph easing.
    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.progress = self.progress.with_easing(easing);
        self
    }

    /// Whether the icon is heading to (or showing) the check mark.
    #[must_use]
    pub const fn at_end(&self) -> bool {
        self.at_end
    }

    /// Point the morph toward the check (`true`) or the cross (`false`).
    ///
    /// A reversal mid-morph takes proportionally less time.
    pub fn set_at_end(&mut self, at_end: bool) {
        if at_end == self.at_end {
            return;
        }
        self.at_end = at_end;
        let target = if at_end { 1.0 } else { 0.0 };
        let remaining = (target - self.progress.value()).abs();
        self.progress.retarget(target, self.duration * remaining);
    }

    /// Advance by `dt` seconds. Returns `true` while morphing.
    pub fn tick(&mut self, dt: f64) -> bool {
        self.progress.update(dt);
        !self.progress.is_complete()
    }

    /// Morph position: 0 is the cross, 1 is the check.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress.value() as f32
    }

    /// Glyph strokes at `progress`, scaled into `bounds`.
    #[must_use]
    pub fn strokes(progress: f32, bounds: Rect) -> [[Point; 2]; 2] {
        let scale = bounds.width.min(bounds.height) / GLYPH_BOX;
        let map = |(x, y): (f32, f32)| {
            Point::new(x.mul_add(scale, bounds.x), y.mul_add(scale, bounds.y))
        };
        let mut out = [[Point::ORIGIN; 2]; 2];
        for (s, stroke) in out.iter_mut().enumerate() {
            for (p, point) in stroke.iter_mut().enumerate() {
                *point = map(CROSS[s][p]).lerp(&map(CHECK[s][p]), progress);
            }
        }
        out
    }

    /// Paint the icon centered in `bounds`.
    pub fn paint(&self, canvas: &mut dyn Canvas, bounds: Rect, tint: Color) {
        let style = StrokeStyle {
            color: tint,
            width: STROKE_WIDTH * bounds.width / GLYPH_BOX,
            cap: LineCap::Round,
        };
        for stroke in Self::strokes(self.progress(), bounds) {
            canvas.stroke_path(&stroke, false, &style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fancy_switch_core::{DrawCommand, RecordingCanvas};

    fn glyph_box() -> Rect {
        Rect::new(0.0, 0.0, 16.0, 16.0)
    }

    #[test]
    fn test_new_is_settled() {
        let mut icon = AnimatedIcon::new(true);
        assert!(icon.at_end());
        assert_eq!(icon.progress(), 1.0);
        assert!(!icon.tick(0.016));
    }

    #[test]
    fn test_morph_runs_for_duration() {
        let mut icon = AnimatedIcon::new(false);
        icon.set_at_end(true);
        assert!(icon.tick(0.1));
        let half = icon.progress();
        assert!(half > 0.0 && half < 1.0);
        assert!(!icon.tick(0.1 + 1e-9));
        assert_eq!(icon.progress(), 1.0);
    }

    #[test]
    fn test_reversal_starts_from_current() {
        let mut icon = AnimatedIcon::new(false).easing(Easing::Linear);
        icon.set_at_end(true);
        icon.tick(0.05);
        let before = icon.progress();
        icon.set_at_end(false);
        assert!((icon.progress() - before).abs() < 1e-6);
        icon.tick(0.05 + 1e-9);
        assert_eq!(icon.progress(), 0.0);
    }

    #[test]
    fn test_strokes_endpoints() {
        let cross = AnimatedIcon::strokes(0.0, glyph_box());
        assert_eq!(cross[0][0], Point::new(4.0, 4.0));
        assert_eq!(cross[1][1], Point::new(4.0, 12.0));

        let check = AnimatedIcon::strokes(1.0, glyph_box());
        assert_eq!(check[0][1], check[1][0]);
        assert_eq!(check[1][1], Point::new(13.0, 4.5));
    }

    #[test]
    fn test_strokes_scale_into_bounds() {
        let s = AnimatedIcon::strokes(0.0, Rect::new(10.0, 20.0, 32.0, 32.0));
        assert_eq!(s[0][0], Point::new(18.0, 28.0));
    }

    #[test]
    fn test_paint_emits_two_round_strokes() {
        let icon = AnimatedIcon::new(false);
        let mut canvas = RecordingCanvas::new();
        icon.paint(&mut canvas, glyph_box(), Color::WHITE);
        assert_eq!(canvas.command_count(), 2);
        for cmd in canvas.commands() {
            match cmd {
                DrawCommand::Path { style, closed, .. } => {
                    assert!(!closed);
                    assert_eq!(style.cap, LineCap::Round);
                    assert_eq!(style.color, Color::WHITE);
                }
                other => panic!("Expected Path command, got {other:?}"),
            }
        }
    }
}
