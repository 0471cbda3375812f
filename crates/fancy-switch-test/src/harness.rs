//! Test harness for driving a widget the way a host would.
//!
//! The harness owns one root widget laid out at its measured size. Queries
//! use attribute selectors, interactions are replayed as pointer and key
//! events, and time advances in fixed 60 Hz frames.

use fancy_switch_core::{
    Constraints, Event, Key, MouseButton, Rect, RecordingCanvas, Semantics, Widget,
};
use image::RgbaImage;
use std::any::Any;

use crate::raster::Rasterizer;
use crate::selector::Selector;

/// Frame length used by [`Harness::tick`].
pub const FRAME_SECONDS: f64 = 1.0 / 60.0;

/// Upper bound on frames for [`Harness::tick_until_idle`].
pub const MAX_IDLE_FRAMES: usize = 600;

/// Test harness for interacting with a widget.
pub struct Harness<W: Widget> {
    root: W,
    messages: Vec<Box<dyn Any + Send>>,
    frames: usize,
}

impl<W: Widget> Harness<W> {
    /// Create a harness and lay the root out at its intrinsic size.
    pub fn new(mut root: W) -> Self {
        let size = root.measure(Constraints::unbounded());
        root.layout(Rect::from_size(size));
        Self {
            root,
            messages: Vec::new(),
            frames: 0,
        }
    }

    /// Root widget.
    #[must_use]
    pub const fn root(&self) -> &W {
        &self.root
    }

    /// Root widget, mutably (for host-side state updates).
    pub fn root_mut(&mut self) -> &mut W {
        &mut self.root
    }

    /// Frames ticked so far.
    #[must_use]
    pub const fn frames(&self) -> usize {
        self.frames
    }

    // === Event Simulation ===

    /// Deliver a single event, keeping any emitted message.
    pub fn dispatch(&mut self, event: &Event) -> &mut Self {
        if let Some(message) = self.root.event(event) {
            self.messages.push(message);
        }
        self
    }

    /// Press and release the primary button at the center of the matching
    /// widget. Does nothing when nothing matches.
    pub fn click(&mut self, selector: &str) -> &mut Self {
        if let Some(bounds) = self.query_bounds(selector) {
            let center = bounds.center();
            self.dispatch(&Event::MouseMove { position: center });
            self.dispatch(&Event::MouseDown {
                position: center,
                button: MouseButton::Left,
            });
            self.dispatch(&Event::MouseUp {
                position: center,
                button: MouseButton::Left,
            });
        }
        self
    }

    /// Give the matching widget keyboard focus.
    pub fn focus(&mut self, selector: &str) -> &mut Self {
        if self.exists(selector) {
            self.dispatch(&Event::FocusIn);
        }
        self
    }

    /// Simulate a key press.
    pub fn press_key(&mut self, key: Key) -> &mut Self {
        self.dispatch(&Event::KeyDown { key })
    }

    /// Advance time by `ms` milliseconds in whole frames.
    pub fn tick(&mut self, ms: u64) -> &mut Self {
        let frames = (ms as f64 * 60.0 / 1000.0).ceil() as usize;
        for _ in 0..frames {
            self.root.tick(FRAME_SECONDS);
            self.frames += 1;
        }
        self
    }

    /// Tick until the widget reports no running animation.
    ///
    /// Returns the number of frames ticked.
    ///
    /// # Panics
    ///
    /// Panics if animations are still running after [`MAX_IDLE_FRAMES`].
    pub fn tick_until_idle(&mut self) -> usize {
        for n in 1..=MAX_IDLE_FRAMES {
            self.frames += 1;
            if !self.root.tick(FRAME_SECONDS) {
                return n;
            }
        }
        panic!("Widget still animating after {MAX_IDLE_FRAMES} frames");
    }

    /// Drain emitted messages of type `T`; other messages are kept.
    pub fn take_messages<T: 'static>(&mut self) -> Vec<T> {
        let mut taken = Vec::new();
        let mut kept = Vec::new();
        for message in self.messages.drain(..) {
            match message.downcast::<T>() {
                Ok(m) => taken.push(*m),
                Err(other) => kept.push(other),
            }
        }
        self.messages = kept;
        taken
    }

    // === Queries ===

    /// Query for a widget matching the selector.
    #[must_use]
    pub fn query(&self, selector: &str) -> Option<&dyn Widget> {
        let sel = Selector::parse(selector).ok()?;
        find_widget(&self.root, &sel)
    }

    /// Check if a widget exists.
    #[must_use]
    pub fn exists(&self, selector: &str) -> bool {
        self.query(selector).is_some()
    }

    /// Bounds of the matching widget.
    #[must_use]
    pub fn query_bounds(&self, selector: &str) -> Option<Rect> {
        self.query(selector).map(|w| w.bounds())
    }

    /// Semantics of the matching widget.
    #[must_use]
    pub fn semantics(&self, selector: &str) -> Option<Semantics> {
        self.query(selector).map(|w| w.semantics())
    }

    fn expect_semantics(&self, selector: &str) -> Semantics {
        match self.semantics(selector) {
            Some(s) => s,
            None => panic!("Expected widget matching '{selector}' to exist"),
        }
    }

    // === Assertions ===

    /// Assert that a widget exists.
    ///
    /// # Panics
    ///
    /// Panics if the widget does not exist.
    pub fn assert_exists(&self, selector: &str) -> &Self {
        assert!(
            self.exists(selector),
            "Expected widget matching '{selector}' to exist"
        );
        self
    }

    /// Assert that the widget reports itself enabled.
    ///
    /// # Panics
    ///
    /// Panics if the widget is missing or disabled.
    pub fn assert_enabled(&self, selector: &str) -> &Self {
        assert!(
            self.expect_semantics(selector).enabled,
            "Expected '{selector}' to be enabled"
        );
        self
    }

    /// Assert that the widget reports itself disabled.
    ///
    /// # Panics
    ///
    /// Panics if the widget is missing or enabled.
    pub fn assert_not_enabled(&self, selector: &str) -> &Self {
        assert!(
            !self.expect_semantics(selector).enabled,
            "Expected '{selector}' to not be enabled"
        );
        self
    }

    /// Assert that the widget exposes a click action.
    ///
    /// # Panics
    ///
    /// Panics if the widget is missing or has no click action.
    pub fn assert_has_click_action(&self, selector: &str) -> &Self {
        assert!(
            self.expect_semantics(selector).has_click_action,
            "Expected '{selector}' to have a click action"
        );
        self
    }

    /// Assert that the widget exposes no click action.
    ///
    /// # Panics
    ///
    /// Panics if the widget is missing or has a click action.
    pub fn assert_no_click_action(&self, selector: &str) -> &Self {
        assert!(
            !self.expect_semantics(selector).has_click_action,
            "Expected '{selector}' to have no click action"
        );
        self
    }

    /// Assert the toggle state.
    ///
    /// # Panics
    ///
    /// Panics if the widget is missing or its toggle state differs.
    pub fn assert_toggled(&self, selector: &str, expected: bool) -> &Self {
        let actual = self.expect_semantics(selector).toggled;
        assert_eq!(
            actual,
            Some(expected),
            "Expected '{selector}' toggled={expected} but got {actual:?}"
        );
        self
    }

    // === Rendering ===

    /// Record one frame of draw commands.
    #[must_use]
    pub fn render(&self) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        self.root.paint(&mut canvas);
        canvas
    }

    /// Rasterize one frame at scale 1 over a white background.
    #[must_use]
    pub fn rasterize(&self) -> RgbaImage {
        let bounds = self.root.bounds();
        let width = bounds.right().ceil().max(0.0) as u32;
        let height = bounds.bottom().ceil().max(0.0) as u32;
        Rasterizer::new(width, height).render(self.render().commands())
    }
}

fn find_widget<'a>(widget: &'a dyn Widget, selector: &Selector) -> Option<&'a dyn Widget> {
    if selector.matches(widget) {
        return Some(widget);
    }
    widget
        .children()
        .iter()
        .find_map(|child| find_widget(child.as_ref(), selector))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fancy_switch_core::{
        AccessibleRole, Canvas, Color, CornerRadius, LayoutResult, Size, TypeId,
    };

    /// Counter that emits its new count on every click and animates for a
    /// fixed number of frames after each click.
    struct Counter {
        count: u32,
        frames_left: u32,
        bounds: Rect,
    }

    impl Counter {
        fn new() -> Self {
            Self {
                count: 0,
                frames_left: 0,
                bounds: Rect::default(),
            }
        }
    }

    impl Widget for Counter {
        fn type_id(&self) -> TypeId {
            TypeId::of::<Self>()
        }
        fn measure(&self, constraints: Constraints) -> Size {
            constraints.constrain(Size::new(20.0, 10.0))
        }
        fn layout(&mut self, bounds: Rect) -> LayoutResult {
            self.bounds = bounds;
            LayoutResult {
                size: bounds.size(),
            }
        }
        fn tick(&mut self, _dt: f64) -> bool {
            self.frames_left = self.frames_left.saturating_sub(1);
            self.frames_left > 0
        }
        fn paint(&self, canvas: &mut dyn Canvas) {
            canvas.fill_rounded_rect(self.bounds, CornerRadius::ZERO, Color::BLACK);
        }
        fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
            match event {
                Event::MouseUp { position, .. } if self.bounds.contains_point(position) => {
                    self.count += 1;
                    self.frames_left = 5;
                    Some(Box::new(self.count))
                }
                Event::KeyDown { key: Key::Enter } => Some(Box::new("enter")),
                _ => None,
            }
        }
        fn is_interactive(&self) -> bool {
            true
        }
        fn accessible_role(&self) -> AccessibleRole {
            AccessibleRole::Switch
        }
        fn test_id(&self) -> Option<&str> {
            Some("counter")
        }
        fn bounds(&self) -> Rect {
            self.bounds
        }
    }

    #[test]
    fn test_new_lays_out_root() {
        let h = Harness::new(Counter::new());
        assert_eq!(
            h.query_bounds("[data-testid='counter']"),
            Some(Rect::new(0.0, 0.0, 20.0, 10.0))
        );
    }

    #[test]
    fn test_query() {
        let h = Harness::new(Counter::new());
        h.assert_exists("[data-testid='counter']");
        h.assert_exists("[role='switch']");
        assert!(!h.exists("[data-testid='other']"));
        assert!(!h.exists("not a selector"));
    }

    #[test]
    fn test_click_collects_messages() {
        let mut h = Harness::new(Counter::new());
        h.click("[data-testid='counter']").click("[data-testid='counter']");
        assert_eq!(h.take_messages::<u32>(), vec![1, 2]);
        assert!(h.take_messages::<u32>().is_empty());
    }

    #[test]
    fn test_click_missing_widget_is_noop() {
        let mut h = Harness::new(Counter::new());
        h.click("[data-testid='missing']");
        assert!(h.take_messages::<u32>().is_empty());
        assert_eq!(h.root().count, 0);
    }

    #[test]
    fn test_take_messages_keeps_other_types() {
        let mut h = Harness::new(Counter::new());
        h.click("[data-testid='counter']").press_key(Key::Enter);
        assert_eq!(h.take_messages::<&'static str>(), vec!["enter"]);
        assert_eq!(h.take_messages::<u32>(), vec![1]);
    }

    #[test]
    fn test_tick_counts_frames() {
        let mut h = Harness::new(Counter::new());
        h.tick(100);
        assert_eq!(h.frames(), 6);
    }

    #[test]
    fn test_tick_until_idle() {
        let mut h = Harness::new(Counter::new());
        h.click("[data-testid='counter']");
        assert_eq!(h.tick_until_idle(), 5);
        assert_eq!(h.tick_until_idle(), 1);
    }

    #[test]
    fn test_semantics_assertions() {
        let h = Harness::new(Counter::new());
        h.assert_enabled("[data-testid='counter']")
            .assert_has_click_action("[data-testid='counter']");
    }

    #[test]
    #[should_panic(expected = "to exist")]
    fn test_assert_on_missing_widget_panics() {
        let h = Harness::new(Counter::new());
        h.assert_enabled("[data-testid='missing']");
    }

    #[test]
    fn test_rasterize() {
        let h = Harness::new(Counter::new());
        let image = h.rasterize();
        assert_eq!(image.dimensions(), (20, 10));
        assert_eq!(image.get_pixel(10, 5).0, [0, 0, 0, 255]);
        assert_eq!(h.render().command_count(), 1);
    }
}
