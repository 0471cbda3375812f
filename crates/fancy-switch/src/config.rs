//! TOML configuration for a switch.
//!
//! ```toml
//! theme = "dark"
//!
//! [spring]
//! stiffness = 950.0
//! damping_ratio = 1.0
//!
//! [icon]
//! duration = 0.2
//! easing = "cubic-in-out"
//!
//! [colors]
//! checked_track = "#006A6A"
//! ```
//!
//! Every key is optional. Color slots left out fall back to the theme.

use crate::colors::{ColorScheme, SwitchColors, Theme};
use crate::defaults::{SwitchDefaults, SwitchGeometry};
use fancy_switch_core::{Color, ColorParseError, Easing, SpringConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// TOML syntax or schema error.
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    /// A color slot did not parse.
    #[error("invalid color for `{slot}`: {source}")]
    InvalidColor {
        /// Slot name
        slot: &'static str,
        /// Parse failure
        #[source]
        source: ColorParseError,
    },

    /// Thumb or icon does not fit the track.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Spring parameters cannot produce motion.
    #[error("invalid spring: {0}")]
    InvalidSpring(String),
}

/// Spring parameters shared by the three transition properties.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringSettings {
    /// Spring stiffness
    pub stiffness: f64,
    /// Damping ratio (1.0 is critical)
    pub damping_ratio: f64,
}

impl Default for SpringSettings {
    fn default() -> Self {
        Self {
            stiffness: SwitchDefaults::STIFFNESS,
            damping_ratio: SwitchDefaults::DAMPING_RATIO,
        }
    }
}

/// Icon morph timing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconSettings {
    /// Morph duration in seconds
    pub duration: f64,
    /// Morph easing
    pub easing: Easing,
}

impl Default for IconSettings {
    fn default() -> Self {
        Self {
            duration: SwitchDefaults::ICON_DURATION,
            easing: Easing::CubicInOut,
        }
    }
}

/// Optional hex overrides for each palette slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorOverrides {
    /// Hex override for the unchecked track
    pub unchecked_track: Option<String>,
    /// Hex override for the checked track
    pub checked_track: Option<String>,
    /// Hex override for the disabled track
    pub disabled_track: Option<String>,
    /// Hex override for the unchecked thumb
    pub unchecked_thumb: Option<String>,
    /// Hex override for the checked thumb
    pub checked_thumb: Option<String>,
    /// Hex override for the disabled thumb
    pub disabled_thumb: Option<String>,
    /// Hex override for the unchecked icon
    pub unchecked_icon: Option<String>,
    /// Hex override for the checked icon
    pub checked_icon: Option<String>,
    /// Hex override for the disabled icon
    pub disabled_icon: Option<String>,
    /// Hex override for the press ripple
    pub ripple: Option<String>,
}

type ColorSetter = fn(SwitchColors, Color) -> SwitchColors;

/// Switch configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchConfig {
    /// Base theme for unset color slots
    pub theme: Theme,
    /// Geometry
    pub geometry: SwitchGeometry,
    /// Spring parameters
    pub spring: SpringSettings,
    /// Icon timing
    pub icon: IconSettings,
    /// Color overrides
    pub colors: ColorOverrides,
}

impl SwitchConfig {
    /// Parse and validate a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Check geometry, spring and colors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.geometry.is_valid() {
            return Err(ConfigError::InvalidGeometry(format!(
                "thumb {} with padding {} does not fit a {}x{} track",
                self.geometry.thumb_size,
                self.geometry.thumb_padding,
                self.geometry.track_width,
                self.geometry.visible_height(),
            )));
        }
        if !(self.spring.stiffness.is_finite() && self.spring.stiffness > 0.0) {
            return Err(ConfigError::InvalidSpring(format!(
                "stiffness must be positive, got {}",
                self.spring.stiffness
            )));
        }
        if !(self.spring.damping_ratio.is_finite() && self.spring.damping_ratio > 0.0) {
            return Err(ConfigError::InvalidSpring(format!(
                "damping ratio must be positive, got {}",
                self.spring.damping_ratio
            )));
        }
        self.switch_colors().map(|_| ())
    }

    /// Spring for the transition.
    #[must_use]
    pub fn spring_config(&self) -> SpringConfig {
        SpringConfig::from_damping_ratio(self.spring.stiffness, self.spring.damping_ratio)
    }

    /// Palette: theme defaults with overrides applied.
    pub fn switch_colors(&self) -> Result<SwitchColors, ConfigError> {
        let c = &self.colors;
        let mut colors = SwitchColors::from_scheme(&ColorScheme::for_theme(self.theme));
        let slots: [(&'static str, &Option<String>, ColorSetter); 10] = [
            ("unchecked_track", &c.unchecked_track, SwitchColors::unchecked_track),
            ("checked_track", &c.checked_track, SwitchColors::checked_track),
            ("disabled_track", &c.disabled_track, SwitchColors::disabled_track),
            ("unchecked_thumb", &c.unchecked_thumb, SwitchColors::unchecked_thumb),
            ("checked_thumb", &c.checked_thumb, SwitchColors::checked_thumb),
            ("disabled_thumb", &c.disabled_thumb, SwitchColors::disabled_thumb),
            ("unchecked_icon", &c.unchecked_icon, SwitchColors::unchecked_icon),
            ("checked_icon", &c.checked_icon, SwitchColors::checked_icon),
            ("disabled_icon", &c.disabled_icon, SwitchColors::disabled_icon),
            ("ripple", &c.ripple, SwitchColors::ripple),
        ];
        for (slot, hex, apply) in slots {
            if let Some(hex) = hex {
                let color = Color::from_hex(hex)
                    .map_err(|source| ConfigError::InvalidColor { slot, source })?;
                colors = apply(colors, color);
            }
        }
        Ok(colors)
    }

    /// Sample configuration file content.
    #[must_use]
    pub fn sample_config() -> String {
        r##"# fancy-switch configuration

# Base palette: "light" or "dark"
theme = "light"

[geometry]
track_width = 64.0
track_height = 48.0
vertical_padding = 4.0
thumb_padding = 6.0
thumb_size = 28.0
reveal_radius = 44.0
icon_size = 16.0

[spring]
# Midpoint of the medium (1500) and medium-low (400) presets
stiffness = 950.0
damping_ratio = 1.0

[icon]
duration = 0.2
easing = "cubic-in-out"

[colors]
# Any slot may be overridden with #rrggbb or #rrggbbaa
# checked_track = "#6750A4"
"##
        .to_string()
    }
}
