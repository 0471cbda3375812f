//! Animated on/off switch with a circular reveal transition.
//!
//! [`FancySwitch`] is a [`Widget`](fancy_switch_core::Widget): the host owns
//! the checked state, passes it in with [`FancySwitch::set_checked`], ticks
//! the widget once per frame and paints it. A tap never flips the switch by
//! itself; it invokes the value-change callback with the requested state and
//! emits a [`SwitchValueChanged`] message.
//!
//! Between states three springs move the thumb, the reveal center and the
//! reveal progress. [`SwitchVisual::derive`] turns those values into one or
//! two layers: the unchecked palette underneath, and the checked palette on
//! top clipped to a growing circle.
//!
//! ```
//! use fancy_switch::{FancySwitch, LayerKind};
//! use fancy_switch_core::Widget;
//!
//! let mut switch = FancySwitch::new(false);
//! switch.set_checked(true);
//! while switch.tick(1.0 / 60.0) {}
//! assert_eq!(switch.visual().layer_kinds(), vec![LayerKind::On]);
//! ```

mod colors;
mod config;
mod defaults;
mod icon;
mod ripple;
mod switch;
mod transition;
mod visual;

pub use colors::{ColorScheme, LayerColors, SwitchColors, Theme};
pub use config::{ColorOverrides, ConfigError, IconSettings, SpringSettings, SwitchConfig};
pub use defaults::{SwitchDefaults, SwitchGeometry};
pub use icon::AnimatedIcon;
pub use ripple::Ripple;
pub use switch::{FancySwitch, SwitchValueChanged, ValueChangeCallback, DEFAULT_TEST_ID};
pub use transition::{SwitchTransition, TransitionValues};
pub use visual::{Layer, LayerKind, RevealClip, SwitchVisual};
