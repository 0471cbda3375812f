//! Layered reveal compositor.
//!
//! A frame of the switch is one or two identical-looking layers stacked
//! bottom to top:
//!
//! - [`LayerKind::Off`]: unchecked colors (disabled colors when disabled),
//!   drawn whenever the reveal is incomplete or the switch is disabled.
//! - [`LayerKind::On`]: checked colors, clipped to a circle of radius
//!   `reveal_radius * reveal_progress` around the reveal center, drawn
//!   whenever the switch is enabled and the reveal has started.
//!
//! During a transition both layers are present and the circle visibly grows
//! out of the thumb. [`SwitchVisual::derive`] is a pure function of the
//! switch state, so every frame can be checked in isolation.

use crate::colors::{LayerColors, SwitchColors};
use crate::defaults::{SwitchDefaults, SwitchGeometry};
use crate::icon::AnimatedIcon;
use crate::transition::TransitionValues;
use fancy_switch_core::{Canvas, ClipShape, CornerRadius, Point, Rect};
use serde::Serialize;

/// Which palette a layer is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    /// Unchecked or disabled palette
    Off,
    /// Checked palette, under the reveal clip
    On,
}

/// Circular clip around the reveal center, relative to the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealClip {
    /// Center x from the track's left edge
    pub center_x: f32,
    /// Center y from the track's top edge
    pub center_y: f32,
    /// Radius
    pub radius: f32,
}

impl RevealClip {
    /// Clip shape in canvas coordinates.
    #[must_use]
    pub fn to_shape(&self, track: Rect) -> ClipShape {
        ClipShape::Circle {
            center: Point::new(track.x + self.center_x, track.y + self.center_y),
            radius: self.radius,
        }
    }
}

/// One visual layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    /// Palette selector
    pub kind: LayerKind,
    /// Selected colors
    pub colors: LayerColors,
    /// Reveal clip, for the `On` layer
    pub clip: Option<RevealClip>,
}

/// Everything needed to paint one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchVisual {
    /// Layers, bottom first
    pub layers: Vec<Layer>,
    /// Thumb left edge from the track's left edge
    pub thumb_offset: f32,
    /// Reveal progress in [0, 1]
    pub reveal_progress: f32,
    /// Whether the icon should be heading to the check mark
    pub icon_at_end: bool,
}

impl SwitchVisual {
    /// Derive the frame for a switch state.
    ///
    /// Offsets are clamped to the track and progress to [0, 1].
    #[must_use]
    pub fn derive(
        checked: bool,
        enabled: bool,
        values: TransitionValues,
        colors: &SwitchColors,
        geometry: &SwitchGeometry,
    ) -> Self {
        let thumb_offset = values
            .thumb_offset
            .clamp(geometry.min_offset(), geometry.max_offset());
        let reveal_offset = values
            .reveal_offset
            .clamp(geometry.min_reveal_center(), geometry.max_reveal_center());
        let reveal_progress = values.reveal_progress.clamp(
            SwitchDefaults::REVEAL_PROGRESS_UNCHECKED,
            SwitchDefaults::REVEAL_PROGRESS_CHECKED,
        );

        let mut layers = Vec::with_capacity(2);
        if reveal_progress != SwitchDefaults::REVEAL_PROGRESS_CHECKED || !enabled {
            layers.push(Layer {
                kind: LayerKind::Off,
                colors: colors.off_layer(enabled),
                clip: None,
            });
        }
        if enabled && reveal_progress != SwitchDefaults::REVEAL_PROGRESS_UNCHECKED {
            layers.push(Layer {
                kind: LayerKind::On,
                colors: colors.on_layer(),
                clip: Some(RevealClip {
                    center_x: reveal_offset,
                    center_y: geometry.visible_height() / 2.0,
                    radius: geometry.reveal_radius * reveal_progress,
                }),
            });
        }

        Self {
            layers,
            thumb_offset,
            reveal_progress,
            icon_at_end: checked,
        }
    }

    /// Kinds of the layers present, bottom first.
    #[must_use]
    pub fn layer_kinds(&self) -> Vec<LayerKind> {
        self.layers.iter().map(|l| l.kind).collect()
    }

    /// Layer of a given kind, if present.
    #[must_use]
    pub fn layer(&self, kind: LayerKind) -> Option<&Layer> {
        self.layers.iter().find(|l| l.kind == kind)
    }

    /// Thumb bounds in canvas coordinates.
    #[must_use]
    pub fn thumb_rect(&self, track: Rect, geometry: &SwitchGeometry) -> Rect {
        let size = geometry.thumb_size;
        Rect::new(
            track.x + self.thumb_offset,
            track.center().y - size / 2.0,
            size,
            size,
        )
    }

    /// Paint every layer into `track` (the visible track in canvas
    /// coordinates).
    pub fn paint(
        &self,
        canvas: &mut dyn Canvas,
        track: Rect,
        geometry: &SwitchGeometry,
        icon: &AnimatedIcon,
    ) {
        let thumb = self.thumb_rect(track, geometry);
        let icon_box = Rect::new(
            thumb.center().x - geometry.icon_size / 2.0,
            thumb.center().y - geometry.icon_size / 2.0,
            geometry.icon_size,
            geometry.icon_size,
        );
        let capsule = CornerRadius::capsule(&track);

        for layer in &self.layers {
            if let Some(clip) = layer.clip {
                canvas.push_clip(clip.to_shape(track));
            }
            canvas.push_clip(ClipShape::RoundedRect {
                bounds: track,
                radius: capsule,
            });
            canvas.fill_rounded_rect(track, capsule, layer.colors.track);
            canvas.fill_circle(thumb.center(), thumb.width / 2.0, layer.colors.thumb);
            icon.paint(canvas, icon_box, layer.colors.icon);
            canvas.pop_clip();
            if layer.clip.is_some() {
                canvas.pop_clip();
            }
        }
    }
}
