//! Canvas implementations for rendering.

use crate::draw::{ClipShape, DrawCommand, StrokeStyle};
use crate::widget::Canvas;
use crate::{Color, CornerRadius, Point, Rect};

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (hand commands to a backend)
/// - Rasterizing snapshots
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    clip_depth: usize,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        self.clip_depth = 0;
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Current clip nesting depth.
    #[must_use]
    pub const fn clip_depth(&self) -> usize {
        self.clip_depth
    }

    /// Clip shapes pushed, in order.
    pub fn clips(&self) -> impl Iterator<Item = &ClipShape> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::PushClip(shape) => Some(shape),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rounded_rect(&mut self, rect: Rect, radius: CornerRadius, color: Color) {
        self.commands
            .push(DrawCommand::rounded_rect(rect, radius, color));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands
            .push(DrawCommand::filled_circle(center, radius, color));
    }

    fn stroke_path(&mut self, points: &[Point], closed: bool, style: &StrokeStyle) {
        self.commands.push(DrawCommand::Path {
            points: points.to_vec(),
            closed,
            style: style.clone(),
        });
    }

    fn push_clip(&mut self, clip: ClipShape) {
        self.clip_depth += 1;
        self.commands.push(DrawCommand::PushClip(clip));
    }

    fn pop_clip(&mut self) {
        // Unbalanced pops are ignored so a misbehaving widget cannot
        // corrupt the replay order.
        if self.clip_depth > 0 {
            self.clip_depth -= 1;
            self.commands.push(DrawCommand::PopClip);
        }
    }
}
