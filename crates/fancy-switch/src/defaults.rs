//! Switch geometry and default constants.
//!
//! All lengths are logical pixels measured inside the switch's own box. The
//! track is the box inset by `vertical_padding` top and bottom; offsets are
//! horizontal distances from the track's left edge.

use fancy_switch_core::{Rect, Size, SpringConfig};
use serde::{Deserialize, Serialize};

/// Named defaults for the switch.
#[derive(Debug, Clone, Copy)]
pub struct SwitchDefaults;

impl SwitchDefaults {
    /// Width of the switch box and track
    pub const TRACK_WIDTH: f32 = 64.0;
    /// Height of the switch box (touch target)
    pub const TRACK_HEIGHT: f32 = 48.0;
    /// Space above and below the visible track
    pub const VERTICAL_PADDING: f32 = 4.0;
    /// Gap between the thumb and the track ends
    pub const THUMB_PADDING: f32 = 6.0;
    /// Thumb diameter
    pub const THUMB_SIZE: f32 = 28.0;
    /// Radius of the checked-colors reveal circle at full progress
    pub const REVEAL_RADIUS: f32 = 44.0;
    /// Icon box edge length
    pub const ICON_SIZE: f32 = 16.0;

    /// Midpoint of the medium and medium-low stiffness presets.
    pub const STIFFNESS: f64 =
        (SpringConfig::STIFFNESS_MEDIUM + SpringConfig::STIFFNESS_MEDIUM_LOW) / 2.0;
    /// Critically damped.
    pub const DAMPING_RATIO: f64 = SpringConfig::DAMPING_RATIO_NO_BOUNCY;

    /// Reveal progress when checked
    pub const REVEAL_PROGRESS_CHECKED: f32 = 1.0;
    /// Reveal progress when unchecked
    pub const REVEAL_PROGRESS_UNCHECKED: f32 = 0.0;

    /// Alpha applied to `on_surface` for disabled track and thumb
    pub const DISABLED_ALPHA: f32 = 0.12;

    /// Settle threshold for pixel offsets.
    pub const OFFSET_PRECISION: f64 = 0.01;
    /// Settle threshold for reveal progress.
    pub const PROGRESS_PRECISION: f64 = 0.001;

    /// Icon morph duration in seconds.
    pub const ICON_DURATION: f64 = 0.2;
    /// Press ripple duration in seconds.
    pub const RIPPLE_DURATION: f64 = 0.3;

    /// Default geometry.
    #[must_use]
    pub const fn geometry() -> SwitchGeometry {
        SwitchGeometry {
            track_width: Self::TRACK_WIDTH,
            track_height: Self::TRACK_HEIGHT,
            vertical_padding: Self::VERTICAL_PADDING,
            thumb_padding: Self::THUMB_PADDING,
            thumb_size: Self::THUMB_SIZE,
            reveal_radius: Self::REVEAL_RADIUS,
            icon_size: Self::ICON_SIZE,
        }
    }

    /// Default spring used by all three transition properties.
    #[must_use]
    pub fn spring() -> SpringConfig {
        SpringConfig::from_damping_ratio(Self::STIFFNESS, Self::DAMPING_RATIO)
    }
}

/// Geometry of a switch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchGeometry {
    /// Box and track width
    pub track_width: f32,
    /// Box height
    pub track_height: f32,
    /// Vertical inset of the visible track
    pub vertical_padding: f32,
    /// Thumb inset from the track ends
    pub thumb_padding: f32,
    /// Thumb diameter
    pub thumb_size: f32,
    /// Full reveal radius
    pub reveal_radius: f32,
    /// Icon box size
    pub icon_size: f32,
}

impl Default for SwitchGeometry {
    fn default() -> Self {
        SwitchDefaults::geometry()
    }
}

impl SwitchGeometry {
    /// Size of the whole switch box.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.track_width, self.track_height)
    }

    /// Height of the visible track.
    #[must_use]
    pub fn visible_height(&self) -> f32 {
        2.0f32.mul_add(-self.vertical_padding, self.track_height)
    }

    /// Visible track inside a laid-out box.
    #[must_use]
    pub fn track_rect(&self, bounds: Rect) -> Rect {
        Rect::new(bounds.x, bounds.y, self.track_width, self.track_height)
            .inset_vertical(self.vertical_padding)
    }

    /// Thumb offset when unchecked.
    #[must_use]
    pub const fn min_offset(&self) -> f32 {
        self.thumb_padding
    }

    /// Thumb offset when checked.
    #[must_use]
    pub fn max_offset(&self) -> f32 {
        self.track_width - self.thumb_size - self.thumb_padding
    }

    /// Reveal center when unchecked.
    #[must_use]
    pub fn min_reveal_center(&self) -> f32 {
        self.thumb_padding + self.thumb_size / 2.0
    }

    /// Reveal center when checked.
    #[must_use]
    pub fn max_reveal_center(&self) -> f32 {
        self.track_width - self.thumb_size / 2.0 - self.thumb_padding
    }

    /// Thumb offset at rest for a state.
    #[must_use]
    pub fn thumb_target(&self, checked: bool) -> f32 {
        if checked {
            self.max_offset()
        } else {
            self.min_offset()
        }
    }

    /// Reveal center at rest for a state.
    #[must_use]
    pub fn reveal_target(&self, checked: bool) -> f32 {
        if checked {
            self.max_reveal_center()
        } else {
            self.min_reveal_center()
        }
    }

    /// Reveal progress at rest for a state.
    #[must_use]
    pub const fn progress_target(checked: bool) -> f32 {
        if checked {
            SwitchDefaults::REVEAL_PROGRESS_CHECKED
        } else {
            SwitchDefaults::REVEAL_PROGRESS_UNCHECKED
        }
    }

    /// Whether the thumb and icon fit inside the visible track.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let all_positive = [
            self.track_width,
            self.track_height,
            self.thumb_size,
            self.reveal_radius,
            self.icon_size,
        ]
        .iter()
        .all(|v| v.is_finite() && *v > 0.0);

        all_positive
            && self.vertical_padding >= 0.0
            && self.thumb_padding >= 0.0
            && self.min_offset() <= self.max_offset()
            && self.thumb_size <= self.visible_height()
            && self.icon_size <= self.thumb_size
    }
}
