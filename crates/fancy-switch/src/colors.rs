//! Switch color palette and theme defaults.

use crate::defaults::SwitchDefaults;
use fancy_switch_core::Color;
use serde::{Deserialize, Serialize};

/// Theme roles the switch palette is derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    /// Brand color
    pub primary: Color,
    /// Content on `primary`
    pub on_primary: Color,
    /// Background surface
    pub surface: Color,
    /// Content on `surface`
    pub on_surface: Color,
    /// Muted surface
    pub surface_variant: Color,
    /// Content on `surface_variant`
    pub on_surface_variant: Color,
}

impl ColorScheme {
    /// Baseline light scheme.
    #[must_use]
    pub fn light() -> Self {
        Self {
            primary: Color::from_rgb_u32(0x0067_50A4),
            on_primary: Color::from_rgb_u32(0x00FF_FFFF),
            surface: Color::from_rgb_u32(0x00FF_FBFE),
            on_surface: Color::from_rgb_u32(0x001C_1B1F),
            surface_variant: Color::from_rgb_u32(0x00E7_E0EC),
            on_surface_variant: Color::from_rgb_u32(0x0049_454F),
        }
    }

    /// Baseline dark scheme.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            primary: Color::from_rgb_u32(0x00D0_BCFF),
            on_primary: Color::from_rgb_u32(0x0038_1E72),
            surface: Color::from_rgb_u32(0x001C_1B1F),
            on_surface: Color::from_rgb_u32(0x00E6_E1E5),
            surface_variant: Color::from_rgb_u32(0x0049_454F),
            on_surface_variant: Color::from_rgb_u32(0x00CA_C4D0),
        }
    }

    /// Scheme for a theme.
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::light()
    }
}

/// Built-in theme selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

/// Track, thumb and icon colors for one visual layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerColors {
    /// Track fill
    pub track: Color,
    /// Thumb fill
    pub thumb: Color,
    /// Icon stroke
    pub icon: Color,
}

/// Colors used by a switch in its different states.
///
/// Immutable once built; the widget selects from it each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchColors {
    unchecked_track: Color,
    checked_track: Color,
    disabled_track: Color,
    unchecked_thumb: Color,
    checked_thumb: Color,
    disabled_thumb: Color,
    unchecked_icon: Color,
    checked_icon: Color,
    disabled_icon: Color,
    ripple: Color,
}

impl Default for SwitchColors {
    fn default() -> Self {
        Self::from_scheme(&ColorScheme::light())
    }
}

impl SwitchColors {
    /// Derive every slot from a theme scheme.
    #[must_use]
    pub fn from_scheme(scheme: &ColorScheme) -> Self {
        let disabled = scheme.on_surface.with_alpha(SwitchDefaults::DISABLED_ALPHA);
        Self {
            unchecked_track: scheme.surface_variant,
            checked_track: scheme.primary,
            disabled_track: disabled,
            unchecked_thumb: scheme.on_surface_variant,
            checked_thumb: scheme.on_primary,
            disabled_thumb: disabled,
            unchecked_icon: scheme.surface_variant,
            checked_icon: scheme.primary,
            disabled_icon: scheme.surface,
            ripple: scheme.primary,
        }
    }

    /// Set the unchecked track color.
    #[must_use]
    pub const fn unchecked_track(mut self, color: Color) -> Self {
        self.unchecked_track = color;
        self
    }

    /// Set the checked track color.
    #[must_use]
    pub const fn checked_track(mut self, color: Color) -> Self {
        self.checked_track = color;
        self
    }

    /// Set the disabled track color.
    #[must_use]
    pub const fn disabled_track(mut self, color: Color) -> Self {
        self.disabled_track = color;
        self
    }

    /// Set the unchecked thumb color.
    #[must_use]
    pub const fn unchecked_thumb(mut self, color: Color) -> Self {
        self.unchecked_thumb = color;
        self
    }

    /// Set the checked thumb color.
    #[must_use]
    pub const fn checked_thumb(mut self, color: Color) -> Self {
        self.checked_thumb = color;
        self
    }

    /// Set the disabled thumb color.
    #[must_use]
    pub const fn disabled_thumb(mut self, color: Color) -> Self {
        self.disabled_thumb = color;
        self
    }

    /// Set the unchecked icon tint.
    #[must_use]
    pub const fn unchecked_icon(mut self, color: Color) -> Self {
        self.unchecked_icon = color;
        self
    }

    /// Set the checked icon tint.
    #[must_use]
    pub const fn checked_icon(mut self, color: Color) -> Self {
        self.checked_icon = color;
        self
    }

    /// Set the disabled icon tint.
    #[must_use]
    pub const fn disabled_icon(mut self, color: Color) -> Self {
        self.disabled_icon = color;
        self
    }

    /// Set the ripple color.
    #[must_use]
    pub const fn ripple(mut self, color: Color) -> Self {
        self.ripple = color;
        self
    }

    /// Colors of the layer drawn under the reveal: unchecked slots, or
    /// disabled slots when the switch is disabled.
    #[must_use]
    pub const fn off_layer(&self, enabled: bool) -> LayerColors {
        if enabled {
            LayerColors {
                track: self.unchecked_track,
                thumb: self.unchecked_thumb,
                icon: self.unchecked_icon,
            }
        } else {
            LayerColors {
                track: self.disabled_track,
                thumb: self.disabled_thumb,
                icon: self.disabled_icon,
            }
        }
    }

    /// Colors of the revealed layer.
    #[must_use]
    pub const fn on_layer(&self) -> LayerColors {
        LayerColors {
            track: self.checked_track,
            thumb: self.checked_thumb,
            icon: self.checked_icon,
        }
    }

    /// Press ripple color.
    #[must_use]
    pub const fn ripple_color(&self) -> Color {
        self.ripple
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_light_defaults() {
        let colors = SwitchColors::default();
        let on = colors.on_layer();
        assert_eq!(on.track.to_hex_with_alpha(), "#6750a4ff");
        assert_eq!(on.thumb, Color::WHITE);
        assert_eq!(on.icon.to_hex_with_alpha(), "#6750a4ff");

        let off = colors.off_layer(true);
        assert_eq!(off.track.to_hex_with_alpha(), "#e7e0ecff");
        assert_eq!(off.thumb.to_hex_with_alpha(), "#49454fff");
        assert_eq!(off.icon, off.track);
    }

    #[test]
    fn test_disabled_slots() {
        let scheme = ColorScheme::light();
        let off = SwitchColors::default().off_layer(false);
        assert_eq!(off.track, scheme.on_surface.with_alpha(0.12));
        assert_eq!(off.thumb, scheme.on_surface.with_alpha(0.12));
        assert_eq!(off.icon, scheme.surface);
    }

    #[test]
    fn test_ripple_defaults_to_primary() {
        assert_eq!(
            SwitchColors::default().ripple_color(),
            ColorScheme::light().primary
        );
    }

    #[test]
    fn test_dark_scheme_differs() {
        let dark = SwitchColors::from_scheme(&ColorScheme::dark());
        assert_ne!(dark, SwitchColors::default());
        assert_eq!(ColorScheme::for_theme(Theme::Dark), ColorScheme::dark());
    }

    #[test]
    fn test_builder_overrides_single_slot() {
        let red = Color::rgb(1.0, 0.0, 0.0);
        let colors = SwitchColors::default().checked_track(red);
        assert_eq!(colors.on_layer().track, red);
        assert_eq!(colors.on_layer().thumb, SwitchColors::default().on_layer().thumb);
    }

    #[test]
    fn test_theme_deserializes_lowercase() {
        let theme: Theme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(theme, Theme::Dark);
    }

    proptest! {
        #[test]
        fn prop_off_layer_never_uses_checked_slots(r in 0.0f32..1.0, enabled: bool) {
            let marker = Color::new(r, 0.5, 0.25, 0.75);
            let colors = SwitchColors::default()
                .checked_track(marker)
                .checked_thumb(marker)
                .checked_icon(marker);
            let off = colors.off_layer(enabled);
            prop_assert_ne!(off.track, marker);
            prop_assert_ne!(off.thumb, marker);
            prop_assert_ne!(off.icon, marker);
        }
    }
}
