//! Draw commands.
//!
//! All rendering reduces to these primitives. A `RecordingCanvas` produces
//! them; backends (and the test rasterizer) replay them in order.

use crate::{Color, CornerRadius, Point, Rect};
use serde::{Deserialize, Serialize};

/// Stroke style for path rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f32,
    /// Line cap style
    pub cap: LineCap,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            cap: LineCap::Butt,
        }
    }
}

/// Line cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineCap {
    /// Flat cap at endpoint
    #[default]
    Butt,
    /// Rounded cap
    Round,
}

/// Fill style for rectangles and circles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Fill color (None = no fill)
    pub fill: Option<Color>,
}

impl BoxStyle {
    /// A solid fill.
    #[must_use]
    pub const fn fill(color: Color) -> Self {
        Self { fill: Some(color) }
    }
}

/// Shape of a clip region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ClipShape {
    /// Rounded rectangle (a capsule when the radius is half the short side)
    RoundedRect {
        /// Clip bounds
        bounds: Rect,
        /// Corner radius
        radius: CornerRadius,
    },
    /// Circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
    },
}

impl ClipShape {
    /// Whether `point` lies inside the clip.
    #[must_use]
    pub fn contains(&self, point: &Point) -> bool {
        match self {
            Self::RoundedRect { bounds, radius } => {
                rounded_rect_contains(bounds, radius.max(), point)
            }
            Self::Circle { center, radius } => center.distance(point) <= *radius,
        }
    }
}

/// Point-in-rounded-rectangle test with a uniform radius.
#[must_use]
pub fn rounded_rect_contains(bounds: &Rect, radius: f32, point: &Point) -> bool {
    if !bounds.contains_point(point) {
        return false;
    }
    let r = radius.min(bounds.width / 2.0).min(bounds.height / 2.0).max(0.0);
    let cx = point.x.clamp(bounds.x + r, bounds.right() - r);
    let cy = point.y.clamp(bounds.y + r, bounds.bottom() - r);
    Point::new(cx, cy).distance(point) <= r
}

/// Drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Draw a polyline
    Path {
        /// Points defining the path
        points: Vec<Point>,
        /// Whether the path is closed
        closed: bool,
        /// Stroke style
        style: StrokeStyle,
    },

    /// Draw a rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Corner radius
        radius: CornerRadius,
        /// Box style
        style: BoxStyle,
    },

    /// Draw a circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Box style
        style: BoxStyle,
    },

    /// Intersect subsequent commands with a clip shape until the matching `PopClip`
    PushClip(ClipShape),

    /// Restore the clip in effect before the last `PushClip`
    PopClip,
}

impl DrawCommand {
    /// Create a filled rounded rectangle.
    #[must_use]
    pub const fn rounded_rect(bounds: Rect, radius: CornerRadius, color: Color) -> Self {
        Self::Rect {
            bounds,
            radius,
            style: BoxStyle::fill(color),
        }
    }

    /// Create a filled circle.
    #[must_use]
    pub const fn filled_circle(center: Point, radius: f32, color: Color) -> Self {
        Self::Circle {
            center,
            radius,
            style: BoxStyle::fill(color),
        }
    }

    /// Fill color of a rect or circle command.
    #[must_use]
    pub const fn fill_color(&self) -> Option<Color> {
        match self {
            Self::Rect { style, .. } | Self::Circle { style, .. } => style.fill,
            Self::Path { style, .. } => Some(style.color),
            Self::PushClip(_) | Self::PopClip => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_style_default() {
        let style = StrokeStyle::default();
        assert_eq!(style.color, Color::BLACK);
        assert_eq!(style.width, 1.0);
        assert_eq!(style.cap, LineCap::Butt);
    }

    #[test]
    fn test_circle_clip_contains() {
        let clip = ClipShape::Circle {
            center: Point::new(20.0, 20.0),
            radius: 10.0,
        };
        assert!(clip.contains(&Point::new(20.0, 20.0)));
        assert!(clip.contains(&Point::new(30.0, 20.0)));
        assert!(!clip.contains(&Point::new(31.0, 20.0)));
    }

    #[test]
    fn test_zero_radius_circle_clip_contains_only_center() {
        let clip = ClipShape::Circle {
            center: Point::new(5.0, 5.0),
            radius: 0.0,
        };
        assert!(clip.contains(&Point::new(5.0, 5.0)));
        assert!(!clip.contains(&Point::new(5.5, 5.0)));
    }

    #[test]
    fn test_capsule_clip_excludes_corners() {
        let bounds = Rect::new(0.0, 0.0, 64.0, 40.0);
        let clip = ClipShape::RoundedRect {
            bounds,
            radius: CornerRadius::capsule(&bounds),
        };
        assert!(clip.contains(&Point::new(32.0, 20.0)));
        assert!(clip.contains(&Point::new(20.0, 0.5)));
        assert!(!clip.contains(&Point::new(1.0, 1.0)));
        assert!(!clip.contains(&Point::new(63.0, 39.0)));
    }

    #[test]
    fn test_fill_color() {
        let rect = DrawCommand::rounded_rect(Rect::default(), CornerRadius::ZERO, Color::WHITE);
        assert_eq!(rect.fill_color(), Some(Color::WHITE));
        assert_eq!(DrawCommand::PopClip.fill_color(), None);
    }

    #[test]
    fn test_draw_command_serialization() {
        let cmd = DrawCommand::filled_circle(Point::new(1.0, 2.0), 3.0, Color::BLACK);
        let json = serde_json::to_string(&cmd).unwrap();
        let back: DrawCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, back);
    }
}
