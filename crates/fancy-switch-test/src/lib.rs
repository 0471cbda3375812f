#![allow(clippy::unwrap_used)]
#![allow(clippy::manual_assert)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]
//! Testing harness for fancy-switch widgets.
//!
//! ```
//! use fancy_switch_core::{
//!     Canvas, Color, Constraints, CornerRadius, Event, LayoutResult, Rect, Size, TypeId,
//!     Widget,
//! };
//! use fancy_switch_test::Harness;
//! use std::any::Any;
//!
//! struct Swatch(Rect);
//!
//! impl Widget for Swatch {
//!     fn type_id(&self) -> TypeId { TypeId::of::<Self>() }
//!     fn measure(&self, c: Constraints) -> Size { c.constrain(Size::new(8.0, 8.0)) }
//!     fn layout(&mut self, bounds: Rect) -> LayoutResult {
//!         self.0 = bounds;
//!         LayoutResult { size: bounds.size() }
//!     }
//!     fn paint(&self, canvas: &mut dyn Canvas) {
//!         canvas.fill_rounded_rect(self.0, CornerRadius::ZERO, Color::BLACK);
//!     }
//!     fn event(&mut self, _: &Event) -> Option<Box<dyn Any + Send>> { None }
//!     fn test_id(&self) -> Option<&str> { Some("swatch") }
//!     fn bounds(&self) -> Rect { self.0 }
//! }
//!
//! let harness = Harness::new(Swatch(Rect::default()));
//! harness.assert_exists("[data-testid='swatch']");
//! assert_eq!(harness.rasterize().get_pixel(4, 4).0, [0, 0, 0, 255]);
//! ```

mod harness;
mod raster;
mod selector;
mod snapshot;

pub use harness::{Harness, FRAME_SECONDS, MAX_IDLE_FRAMES};
pub use raster::Rasterizer;
pub use selector::{Selector, SelectorError, SelectorParser};
pub use snapshot::{Comparison, Snapshot, SnapshotError};
