//! A minimal host: owns the checked state and drives the frame loop.

use fancy_switch::{FancySwitch, LayerKind, SwitchConfig, TransitionValues};
use fancy_switch_core::{
    Constraints, DrawCommand, Event, MouseButton, Rect, RecordingCanvas, Widget,
};
use serde::Serialize;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::info;

/// One rendered frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct FrameReport {
    /// Frame number, from 0
    pub(crate) index: usize,
    /// Host state when painted
    pub(crate) checked: bool,
    /// Animated values when painted
    pub(crate) values: TransitionValues,
    /// Layers, bottom first
    pub(crate) layers: Vec<LayerKind>,
    /// Whether another frame is needed
    pub(crate) animating: bool,
    /// Draw commands, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) commands: Option<Vec<DrawCommand>>,
}

impl FrameReport {
    /// One-line summary.
    #[must_use]
    pub(crate) fn summary(&self) -> String {
        let layers: Vec<&str> = self
            .layers
            .iter()
            .map(|k| match k {
                LayerKind::Off => "off",
                LayerKind::On => "on",
            })
            .collect();
        format!(
            "frame {:>3}  checked={:<5}  thumb={:>6.2}  reveal={:>6.2}  progress={:.3}  layers={}{}",
            self.index,
            self.checked,
            self.values.thumb_offset,
            self.values.reveal_offset,
            self.values.reveal_progress,
            layers.join("+"),
            if self.animating { "  *" } else { "" },
        )
    }
}

/// Owns a switch and its checked state.
pub(crate) struct SwitchHost {
    switch: FancySwitch,
    requests: Arc<Mutex<Vec<bool>>>,
    frame: usize,
}

impl SwitchHost {
    /// Build a host around a switch configured from `config`.
    pub(crate) fn new(
        checked: bool,
        enabled: bool,
        config: &SwitchConfig,
    ) -> Result<Self, fancy_switch::ConfigError> {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&requests);
        let mut switch = FancySwitch::from_config(checked, config)?
            .enabled(enabled)
            .on_value_change(move |value| {
                sink.lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(value);
            });
        let size = switch.measure(Constraints::unbounded());
        switch.layout(Rect::from_size(size));
        Ok(Self {
            switch,
            requests,
            frame: 0,
        })
    }

    /// Host-side checked state.
    #[must_use]
    pub(crate) const fn checked(&self) -> bool {
        self.switch.is_checked()
    }

    /// Tap the middle of the track and apply any requested change.
    ///
    /// Returns `true` if the switch asked for a new state.
    pub(crate) fn tap(&mut self) -> bool {
        let center = self.switch.track_rect().center();
        self.switch.event(&Event::MouseDown {
            position: center,
            button: MouseButton::Left,
        });
        let message = self.switch.event(&Event::MouseUp {
            position: center,
            button: MouseButton::Left,
        });
        self.apply_requests();
        message.is_some()
    }

    fn apply_requests(&mut self) {
        let pending: Vec<bool> = self
            .requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect();
        for checked in pending {
            info!(checked, "host applied new state");
            self.switch.set_checked(checked);
        }
    }

    /// Tick by `dt` seconds and paint.
    pub(crate) fn frame(&mut self, dt: f64, record: bool) -> FrameReport {
        let animating = self.switch.tick(dt);
        let mut canvas = RecordingCanvas::new();
        self.switch.paint(&mut canvas);
        let report = FrameReport {
            index: self.frame,
            checked: self.switch.is_checked(),
            values: self.switch.transition().values(),
            layers: self.switch.visual().layer_kinds(),
            animating,
            commands: record.then(|| canvas.take_commands()),
        };
        self.frame += 1;
        report
    }
}
