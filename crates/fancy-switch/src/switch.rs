//! The fancy switch widget.

use crate::colors::SwitchColors;
use crate::config::{ConfigError, SwitchConfig};
use crate::defaults::{SwitchDefaults, SwitchGeometry};
use crate::icon::AnimatedIcon;
use crate::ripple::Ripple;
use crate::transition::SwitchTransition;
use crate::visual::SwitchVisual;
use fancy_switch_core::{
    AccessibleRole, Canvas, Constraints, Easing, Event, LayoutResult, Point, Rect, Semantics,
    Size, SpringConfig, TypeId, Widget,
};
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Default test tag.
pub const DEFAULT_TEST_ID: &str = "Switch";

/// Callback invoked with the requested new state.
pub type ValueChangeCallback = Arc<dyn Fn(bool) + Send + Sync>;

/// Message emitted when the user asks to flip the switch.
///
/// The widget does not change its own state; the host decides and calls
/// [`FancySwitch::set_checked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchValueChanged {
    /// Requested state
    pub checked: bool,
}

/// Animated on/off switch with a circular reveal between palettes.
///
/// # Examples
///
/// ```
/// use fancy_switch::FancySwitch;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// let requested = Arc::new(AtomicBool::new(false));
/// let sink = Arc::clone(&requested);
/// let switch = FancySwitch::new(false)
///     .on_value_change(move |checked| sink.store(checked, Ordering::SeqCst));
///
/// assert!(!switch.is_checked());
/// assert!(switch.has_click_action());
/// ```
pub struct FancySwitch {
    checked: bool,
    enabled: bool,
    colors: SwitchColors,
    geometry: SwitchGeometry,
    spring: SpringConfig,
    on_value_change: Option<ValueChangeCallback>,
    test_id_value: String,
    accessible_name_value: Option<String>,
    transition: SwitchTransition,
    icon: AnimatedIcon,
    ripple: Option<Ripple>,
    pressed: bool,
    focused: bool,
    bounds: Rect,
}

impl fmt::Debug for FancySwitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FancySwitch")
            .field("checked", &self.checked)
            .field("enabled", &self.enabled)
            .field("has_callback", &self.on_value_change.is_some())
            .field("test_id", &self.test_id_value)
            .field("values", &self.transition.values())
            .field("pressed", &self.pressed)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

impl FancySwitch {
    /// Create a switch resting in `checked`.
    #[must_use]
    pub fn new(checked: bool) -> Self {
        let geometry = SwitchDefaults::geometry();
        Self {
            checked,
            enabled: true,
            colors: SwitchColors::default(),
            geometry,
            spring: SwitchDefaults::spring(),
            on_value_change: None,
            test_id_value: DEFAULT_TEST_ID.to_string(),
            accessible_name_value: None,
            transition: SwitchTransition::new(checked, geometry),
            icon: AnimatedIcon::new(checked),
            ripple: None,
            pressed: false,
            focused: false,
            bounds: Rect::from_size(geometry.size()),
        }
    }

    /// Create a switch from a validated configuration.
    pub fn from_config(checked: bool, config: &SwitchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(checked)
            .geometry(config.geometry)
            .spring(config.spring_config())
            .colors(config.switch_colors()?)
            .icon_timing(config.icon.duration, config.icon.easing))
    }

    /// Set whether the switch responds to input.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the palette.
    #[must_use]
    pub const fn colors(mut self, colors: SwitchColors) -> Self {
        self.colors = colors;
        self
    }

    /// Set the geometry. Resets the transition to rest.
    #[must_use]
    pub fn geometry(mut self, geometry: SwitchGeometry) -> Self {
        self.geometry = geometry;
        self.transition = SwitchTransition::with_spring(self.checked, geometry, self.spring);
        let size = geometry.size();
        self.bounds = Rect::new(self.bounds.x, self.bounds.y, size.width, size.height);
        self
    }

    /// Set the spring driving the transition. Resets the transition to rest.
    #[must_use]
    pub fn spring(mut self, spring: SpringConfig) -> Self {
        self.spring = spring;
        self.transition = SwitchTransition::with_spring(self.checked, self.geometry, spring);
        self
    }

    /// Set the icon morph duration and easing.
    #[must_use]
    pub fn icon_timing(mut self, duration: f64, easing: Easing) -> Self {
        self.icon = AnimatedIcon::new(self.checked)
            .duration(duration)
            .easing(easing);
        self
    }

    /// Set the value-change callback. Without one the switch ignores taps.
    #[must_use]
    pub fn on_value_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.on_value_change = Some(Arc::new(callback));
        self
    }

    /// Set the test tag (defaults to `"Switch"`).
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = id.into();
        self
    }

    /// Set the accessible name.
    #[must_use]
    pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Current checked state, as last set by the host.
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        self.checked
    }

    /// Get enabled state.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a tap would invoke the callback.
    #[must_use]
    pub const fn has_click_action(&self) -> bool {
        self.enabled && self.on_value_change.is_some()
    }

    /// Palette in use.
    #[must_use]
    pub const fn get_colors(&self) -> &SwitchColors {
        &self.colors
    }

    /// Geometry in use.
    #[must_use]
    pub const fn get_geometry(&self) -> &SwitchGeometry {
        &self.geometry
    }

    /// Transition state.
    #[must_use]
    pub const fn transition(&self) -> &SwitchTransition {
        &self.transition
    }

    /// Icon state.
    #[must_use]
    pub const fn icon(&self) -> &AnimatedIcon {
        &self.icon
    }

    /// Whether a press ripple is showing.
    #[must_use]
    pub const fn is_rippling(&self) -> bool {
        self.ripple.is_some()
    }

    /// Apply host state. Animates from the current frame if it changed.
    pub fn set_checked(&mut self, checked: bool) {
        if checked == self.checked {
            return;
        }
        self.checked = checked;
        self.transition.set_target(checked);
        self.icon.set_at_end(checked);
        debug!(test_id = %self.test_id_value, checked, "switch retargeted");
    }

    /// Apply host enabled state. Offsets are unaffected.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.pressed = false;
            self.focused = false;
        }
    }

    /// Frame for the current state.
    #[must_use]
    pub fn visual(&self) -> SwitchVisual {
        SwitchVisual::derive(
            self.checked,
            self.enabled,
            self.transition.values(),
            &self.colors,
            &self.geometry,
        )
    }

    /// Visible track in canvas coordinates; also the tap region.
    #[must_use]
    pub fn track_rect(&self) -> Rect {
        self.geometry.track_rect(self.bounds)
    }

    fn hit_test(&self, point: &Point) -> bool {
        self.track_rect().contains_point(point)
    }

    fn press(&mut self, position: Point) {
        if !self.has_click_action() {
            debug!(
                test_id = %self.test_id_value,
                enabled = self.enabled,
                has_callback = self.on_value_change.is_some(),
                "tap ignored"
            );
            return;
        }
        let track = self.track_rect();
        self.pressed = true;
        self.ripple = Some(Ripple::start(
            Point::new(position.x - track.x, position.y - track.y),
            track,
        ));
    }

    fn request_toggle(&mut self) -> Option<Box<dyn Any + Send>> {
        let callback = self.on_value_change.as_ref()?;
        let requested = !self.checked;
        debug!(test_id = %self.test_id_value, requested, "tap accepted");
        callback(requested);
        Some(Box::new(SwitchValueChanged { checked: requested }))
    }
}

impl Widget for FancySwitch {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.geometry.size())
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        let size = self.geometry.size();
        self.bounds = Rect::new(bounds.x, bounds.y, size.width, size.height);
        LayoutResult { size }
    }

    fn tick(&mut self, dt: f64) -> bool {
        let was_moving = !self.transition.is_settled();
        let moving = self.transition.advance(dt);
        if was_moving && !moving {
            trace!(test_id = %self.test_id_value, checked = self.checked, "transition settled");
        }
        let morphing = self.icon.tick(dt);
        let rippling = self.ripple.as_mut().is_some_and(|r| r.tick(dt));
        if !rippling {
            self.ripple = None;
        }
        moving || morphing || rippling
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let track = self.track_rect();
        self.visual().paint(canvas, track, &self.geometry, &self.icon);
        if let Some(ripple) = &self.ripple {
            ripple.paint(canvas, track, self.colors.ripple_color());
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if let Some(position) = event.press_position() {
            if self.hit_test(&position) {
                self.press(position);
            }
            return None;
        }

        if let Some(position) = event.release_position() {
            if !std::mem::take(&mut self.pressed) || !self.hit_test(&position) {
                return None;
            }
            return self.request_toggle();
        }

        match event {
            Event::TouchCancel { .. } => {
                self.pressed = false;
                None
            }
            Event::FocusIn => {
                self.focused = self.is_focusable();
                None
            }
            Event::FocusOut => {
                self.focused = false;
                None
            }
            Event::KeyDown { key } if key.activates() && self.focused => {
                if self.has_click_action() {
                    self.request_toggle()
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn is_interactive(&self) -> bool {
        self.has_click_action()
    }

    fn is_focusable(&self) -> bool {
        self.has_click_action()
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Switch
    }

    fn test_id(&self) -> Option<&str> {
        Some(&self.test_id_value)
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn semantics(&self) -> Semantics {
        Semantics {
            role: AccessibleRole::Switch,
            test_tag: Some(self.test_id_value.clone()),
            label: self.accessible_name_value.clone(),
            enabled: self.enabled,
            has_click_action: self.has_click_action(),
            focusable: self.is_focusable(),
            toggled: Some(self.checked),
        }
    }
}
