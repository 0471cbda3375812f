//! Core types and traits for the fancy-switch widget.
//!
//! This crate provides the small retained-widget foundation the switch is
//! built on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`CornerRadius`]
//! - Color representation: [`Color`] with hex parsing and compositing
//! - Layout constraints: [`Constraints`]
//! - Input: [`Event`]
//! - Rendering: [`Widget`], [`Canvas`], [`DrawCommand`], [`RecordingCanvas`]
//! - Accessibility: [`Semantics`]
//! - Animation: [`Spring`], [`SpringConfig`], [`Interpolator`], [`EasedValue`]

pub mod animation;
mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
mod semantics;
pub mod widget;

pub use animation::{EasedValue, Easing, Interpolator, Spring, SpringConfig, SpringStep};
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{BoxStyle, ClipShape, DrawCommand, LineCap, StrokeStyle};
pub use event::{Event, Key, MouseButton, TouchId};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use semantics::{AccessibleRole, Semantics};
pub use widget::{Canvas, LayoutResult, TypeId, Widget, WidgetId};
