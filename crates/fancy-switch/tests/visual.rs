//! Rasterized frames of the four resting states, probed pixel by pixel.
//!
//! Probe points for a 64×48 switch at the origin (visible track at y 4..44):
//! the track away from the thumb, the top of the thumb above the icon, and a
//! point on the icon stroke.

use fancy_switch::{ColorScheme, FancySwitch, SwitchColors};
use fancy_switch_core::Color;
use fancy_switch_test::{Comparison, Harness, Snapshot};

const WHITE: [u8; 4] = [255, 255, 255, 255];

fn frame(checked: bool, enabled: bool) -> Harness<FancySwitch> {
    Harness::new(FancySwitch::new(checked).enabled(enabled).on_value_change(|_| {}))
}

fn px(harness: &Harness<FancySwitch>, x: u32, y: u32) -> [u8; 4] {
    harness.rasterize().get_pixel(x, y).0
}

fn opaque(color: Color) -> [u8; 4] {
    color.over(&Color::WHITE).to_rgba8()
}

/// Round-trip through 8-bit channels, as the rasterizer's target does.
fn quantized(color: Color) -> Color {
    let [r, g, b, a] = color.to_rgba8();
    Color::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        f32::from(a) / 255.0,
    )
}

fn disabled_track() -> Color {
    ColorScheme::light().on_surface.with_alpha(0.12)
}

fn assert_background(harness: &Harness<FancySwitch>) {
    // Outside the capsule corner and inside the vertical padding.
    assert_eq!(px(harness, 1, 5), WHITE);
    assert_eq!(px(harness, 32, 1), WHITE);
    assert_eq!(px(harness, 32, 46), WHITE);
}

#[test]
fn test_switch_on() {
    let scheme = ColorScheme::light();
    let h = frame(true, true);
    let image = h.rasterize();
    assert_eq!(image.dimensions(), (64, 48));

    assert_eq!(px(&h, 10, 24), opaque(scheme.primary));
    assert_eq!(px(&h, 44, 13), opaque(scheme.on_primary));
    assert_eq!(px(&h, 42, 27), opaque(scheme.primary));
    // Thumb is on the right: nothing of the unchecked palette remains.
    assert_eq!(px(&h, 20, 13), opaque(scheme.primary));
    assert_background(&h);
}

#[test]
fn test_switch_off() {
    let scheme = ColorScheme::light();
    let h = frame(false, true);

    assert_eq!(px(&h, 54, 24), opaque(scheme.surface_variant));
    assert_eq!(px(&h, 20, 13), opaque(scheme.on_surface_variant));
    assert_eq!(px(&h, 20, 24), opaque(scheme.surface_variant));
    assert_eq!(px(&h, 44, 13), opaque(scheme.surface_variant));
    assert_background(&h);
}

#[test]
fn test_switch_on_disabled() {
    let scheme = ColorScheme::light();
    let h = frame(true, false);
    let track = quantized(disabled_track().over(&Color::WHITE));

    assert_eq!(px(&h, 10, 24), track.to_rgba8());
    assert_eq!(px(&h, 44, 13), disabled_track().over(&track).to_rgba8());
    assert_eq!(px(&h, 42, 27), opaque(scheme.surface));
    assert_background(&h);
}

#[test]
fn test_switch_off_disabled() {
    let scheme = ColorScheme::light();
    let h = frame(false, false);
    let track = quantized(disabled_track().over(&Color::WHITE));

    assert_eq!(px(&h, 54, 24), track.to_rgba8());
    assert_eq!(px(&h, 20, 13), disabled_track().over(&track).to_rgba8());
    assert_eq!(px(&h, 20, 24), opaque(scheme.surface));
    assert_background(&h);
}

#[test]
fn test_disabled_ignores_checked_palette() {
    let h = frame(true, false);
    let on = SwitchColors::default().on_layer();
    let image = h.rasterize();
    assert!(image.pixels().all(|p| p.0 != opaque(on.track)));
}

#[test]
fn test_dark_theme_on() {
    let scheme = ColorScheme::dark();
    let switch = FancySwitch::new(true).colors(SwitchColors::from_scheme(&scheme));
    let h = Harness::new(switch);
    assert_eq!(px(&h, 10, 24), opaque(scheme.primary));
    assert_eq!(px(&h, 44, 13), opaque(scheme.on_primary));
}

#[test]
fn test_snapshot_round_trip() {
    let tmp = tempfile::tempdir().unwrap();
    let store = Snapshot::new(tmp.path());

    let on = frame(true, true).rasterize();
    let off = frame(false, true).rasterize();
    store.save("switch_on", &on).unwrap();

    store.assert_match("switch_on", &frame(true, true).rasterize(), 0.0);
    assert!(matches!(
        store.compare("switch_on", &off, 0.01).unwrap(),
        Comparison::Mismatch { .. }
    ));
    assert_eq!(
        store.compare("switch_off", &off, 0.0).unwrap(),
        Comparison::Missing
    );
}
