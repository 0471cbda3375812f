//! Press ripple.

use crate::defaults::SwitchDefaults;
use fancy_switch_core::{Canvas, ClipShape, Color, CornerRadius, EasedValue, Easing, Point, Rect};

/// Peak ripple opacity.
const RIPPLE_ALPHA: f32 = 0.16;

/// A circle that grows from the press point to cover the track while fading.
#[derive(Debug, Clone)]
pub struct Ripple {
    origin: Point,
    max_radius: f32,
    progress: EasedValue,
}

impl Ripple {
    /// Start a ripple at `origin`, relative to the top-left of `track`.
    #[must_use]
    pub fn start(origin: Point, track: Rect) -> Self {
        let corners = [
            Point::ORIGIN,
            Point::new(track.width, 0.0),
            Point::new(0.0, track.height),
            Point::new(track.width, track.height),
        ];
        let max_radius = corners
            .iter()
            .map(|c| c.distance(&origin))
            .fold(0.0f32, f32::max);
        Self {
            origin,
            max_radius,
            progress: EasedValue::new(0.0, 1.0, SwitchDefaults::RIPPLE_DURATION)
                .with_easing(Easing::CubicOut),
        }
    }

    /// Advance by `dt` seconds. Returns `true` while visible.
    pub fn tick(&mut self, dt: f64) -> bool {
        self.progress.update(dt);
        !self.is_finished()
    }

    /// Whether the ripple has faded out.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.progress.is_complete()
    }

    /// Current radius.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.max_radius * self.progress.value() as f32
    }

    /// Current tint for a base ripple color.
    #[must_use]
    pub fn tint(&self, color: Color) -> Color {
        let fade = 1.0 - self.progress.progress() as f32;
        color.with_alpha(color.a * RIPPLE_ALPHA * fade)
    }

    /// Paint the ripple clipped to the capsule `track`.
    pub fn paint(&self, canvas: &mut dyn Canvas, track: Rect, color: Color) {
        if self.is_finished() {
            return;
        }
        canvas.push_clip(ClipShape::RoundedRect {
            bounds: track,
            radius: CornerRadius::capsule(&track),
        });
        canvas.fill_circle(
            Point::new(track.x + self.origin.x, track.y + self.origin.y),
            self.radius(),
            self.tint(color),
        );
        canvas.pop_clip();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fancy_switch_core::{DrawCommand, RecordingCanvas};

    fn track() -> Rect {
        Rect::new(0.0, 4.0, 64.0, 40.0)
    }

    #[test]
    fn test_start_covers_farthest_corner() {
        let ripple = Ripple::start(Point::new(0.0, 0.0), track());
        assert!((ripple.max_radius - 64.0f32.hypot(40.0)).abs() < 1e-4);
        assert_eq!(ripple.radius(), 0.0);
    }

    #[test]
    fn test_grows_and_fades() {
        let mut ripple = Ripple::start(Point::new(32.0, 20.0), track());
        let start_alpha = ripple.tint(Color::BLACK).a;
        assert!((start_alpha - RIPPLE_ALPHA).abs() < 1e-6);

        assert!(ripple.tick(0.15));
        assert!(ripple.radius() > 0.0);
        assert!(ripple.tint(Color::BLACK).a < start_alpha);

        assert!(!ripple.tick(0.2));
        assert!(ripple.is_finished());
        assert_eq!(ripple.tint(Color::BLACK).a, 0.0);
    }

    #[test]
    fn test_paint_is_clipped_to_track() {
        let mut ripple = Ripple::start(Point::new(32.0, 20.0), track());
        ripple.tick(0.1);
        let mut canvas = RecordingCanvas::new();
        ripple.paint(&mut canvas, track(), Color::BLACK);

        let cmds = canvas.commands();
        assert_eq!(cmds.len(), 3);
        assert!(matches!(cmds[0], DrawCommand::PushClip(ClipShape::RoundedRect { .. })));
        match &cmds[1] {
            DrawCommand::Circle { center, .. } => assert_eq!(*center, Point::new(32.0, 24.0)),
            other => panic!("Expected Circle command, got {other:?}"),
        }
        assert_eq!(cmds[2], DrawCommand::PopClip);
    }

    #[test]
    fn test_finished_ripple_paints_nothing() {
        let mut ripple = Ripple::start(Point::ORIGIN, track());
        ripple.tick(1.0);
        let mut canvas = RecordingCanvas::new();
        ripple.paint(&mut canvas, track(), Color::BLACK);
        assert!(canvas.is_empty());
    }
}
