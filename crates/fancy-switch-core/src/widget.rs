//! Widget trait and related types.
//!
//! Widgets follow a measure-layout-tick-paint cycle driven by the host's
//! frame loop:
//!
//! 1. **Measure**: Compute intrinsic size given constraints
//! 2. **Layout**: Position self within allocated bounds
//! 3. **Tick**: Advance animations by the frame delta
//! 4. **Paint**: Generate draw commands for rendering
//!
//! Events are delivered between frames through [`Widget::event`].
//!
//! # Examples
//!
//! ```
//! use fancy_switch_core::{TypeId, WidgetId};
//!
//! let id = WidgetId::new(42);
//! assert_eq!(id.0, 42);
//! assert_ne!(TypeId::of::<String>(), TypeId::of::<i32>());
//! ```

use crate::constraints::Constraints;
use crate::draw::{ClipShape, StrokeStyle};
use crate::event::Event;
use crate::geometry::{CornerRadius, Point, Rect, Size};
use crate::semantics::{AccessibleRole, Semantics};
use crate::Color;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Unique identifier for a widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Create a new widget ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Type identifier for widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait.
pub trait Widget: Send + Sync {
    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Compute intrinsic size given constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Position within allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Advance animations by `dt` seconds.
    ///
    /// Returns `true` while any animation is still running, so the host knows
    /// to schedule another frame.
    fn tick(&mut self, _dt: f64) -> bool {
        false
    }

    /// Generate draw commands for rendering.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle input events, optionally emitting a message.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Get child widgets for tree traversal.
    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    /// Check if this widget is interactive (accepts clicks).
    fn is_interactive(&self) -> bool {
        false
    }

    /// Check if this widget can receive keyboard focus.
    fn is_focusable(&self) -> bool {
        false
    }

    /// Get the accessible name for screen readers.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Get the accessible role.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::default()
    }

    /// Semantics node exposed to the accessibility tree and test automation.
    fn semantics(&self) -> Semantics {
        Semantics {
            role: self.accessible_role(),
            test_tag: self.test_id().map(str::to_string),
            label: self.accessible_name().map(str::to_string),
            enabled: self.is_interactive(),
            has_click_action: self.is_interactive(),
            focusable: self.is_focusable(),
            toggled: None,
        }
    }
}

/// Canvas trait for paint operations.
///
/// A minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Fill a rectangle with rounded corners.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: CornerRadius, color: Color);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Stroke a polyline.
    fn stroke_path(&mut self, points: &[Point], closed: bool, style: &StrokeStyle);

    /// Push a clip region, intersected with the current one.
    fn push_clip(&mut self, clip: ClipShape);

    /// Pop the clip region.
    fn pop_clip(&mut self);
}
