//! Software rasterizer for recorded draw commands.
//!
//! Coverage is binary: a pixel is painted when its center lies inside the
//! shape and inside every active clip. That keeps expected colors exact, so
//! visual tests can probe individual pixels.

use fancy_switch_core::draw::rounded_rect_contains;
use fancy_switch_core::{ClipShape, Color, DrawCommand, Point, Rect};
use image::{Rgba, RgbaImage};

/// Replays [`DrawCommand`]s into an RGBA image.
#[derive(Debug, Clone, Copy)]
pub struct Rasterizer {
    width: u32,
    height: u32,
    scale: f32,
    background: Color,
}

impl Rasterizer {
    /// Rasterizer for a `width`×`height` logical canvas at scale 1.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            scale: 1.0,
            background: Color::WHITE,
        }
    }

    /// Set device pixels per logical pixel.
    #[must_use]
    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale.max(0.1);
        self
    }

    /// Set the background fill.
    #[must_use]
    pub const fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Output size in device pixels.
    #[must_use]
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (self.width as f32 * self.scale).ceil() as u32,
            (self.height as f32 * self.scale).ceil() as u32,
        )
    }

    /// Render commands in order. Unbalanced `PopClip`s are ignored.
    #[must_use]
    pub fn render(&self, commands: &[DrawCommand]) -> RgbaImage {
        let (w, h) = self.pixel_size();
        let mut image = RgbaImage::from_pixel(w, h, Rgba(self.background.to_rgba8()));
        let mut clips: Vec<ClipShape> = Vec::new();

        for command in commands {
            match command {
                DrawCommand::PushClip(shape) => clips.push(*shape),
                DrawCommand::PopClip => {
                    clips.pop();
                }
                DrawCommand::Rect {
                    bounds,
                    radius,
                    style,
                } => {
                    if let Some(color) = style.fill {
                        let r = radius.max();
                        self.fill(&mut image, &clips, *bounds, color, |p| {
                            rounded_rect_contains(bounds, r, p)
                        });
                    }
                }
                DrawCommand::Circle {
                    center,
                    radius,
                    style,
                } => {
                    if let Some(color) = style.fill {
                        let bounds = Rect::new(
                            center.x - radius,
                            center.y - radius,
                            radius * 2.0,
                            radius * 2.0,
                        );
                        self.fill(&mut image, &clips, bounds, color, |p| {
                            center.distance(p) <= *radius
                        });
                    }
                }
                DrawCommand::Path {
                    points,
                    closed,
                    style,
                } => {
                    let Some(bounds) = path_bounds(points, style.width) else {
                        continue;
                    };
                    let half = style.width / 2.0;
                    let segments = segments(points, *closed);
                    self.fill(&mut image, &clips, bounds, style.color, |p| {
                        segments
                            .iter()
                            .any(|(a, b)| distance_to_segment(p, a, b) <= half)
                    });
                }
            }
        }
        image
    }

    fn fill(
        &self,
        image: &mut RgbaImage,
        clips: &[ClipShape],
        bounds: Rect,
        color: Color,
        inside: impl Fn(&Point) -> bool,
    ) {
        let (w, h) = image.dimensions();
        let to_px = |v: f32, max: u32| (v * self.scale).floor().clamp(0.0, max as f32) as u32;
        let (x0, x1) = (to_px(bounds.x, w), to_px(bounds.right() + 1.0, w));
        let (y0, y1) = (to_px(bounds.y, h), to_px(bounds.bottom() + 1.0, h));

        for py in y0..y1 {
            for px in x0..x1 {
                let p = Point::new(
                    (px as f32 + 0.5) / self.scale,
                    (py as f32 + 0.5) / self.scale,
                );
                if !inside(&p) || !clips.iter().all(|c| c.contains(&p)) {
                    continue;
                }
                let pixel = image.get_pixel_mut(px, py);
                let [r, g, b, a] = pixel.0;
                let dst = Color::new(
                    f32::from(r) / 255.0,
                    f32::from(g) / 255.0,
                    f32::from(b) / 255.0,
                    f32::from(a) / 255.0,
                );
                *pixel = Rgba(color.over(&dst).to_rgba8());
            }
        }
    }
}

fn path_bounds(points: &[Point], width: f32) -> Option<Rect> {
    let first = points.first()?;
    let (mut min, mut max) = (*first, *first);
    for p in points {
        min = Point::new(min.x.min(p.x), min.y.min(p.y));
        max = Point::new(max.x.max(p.x), max.y.max(p.y));
    }
    let pad = width / 2.0;
    Some(Rect::new(
        min.x - pad,
        min.y - pad,
        2.0f32.mul_add(pad, max.x - min.x),
        2.0f32.mul_add(pad, max.y - min.y),
    ))
}

fn segments(points: &[Point], closed: bool) -> Vec<(Point, Point)> {
    let mut out: Vec<_> = points.windows(2).map(|w| (w[0], w[1])).collect();
    if closed && points.len() > 2 {
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            out.push((*last, *first));
        }
    }
    if points.len() == 1 {
        out.push((points[0], points[0]));
    }
    out
}

/// Distance from `p` to the segment `a`-`b` (round-capped).
fn distance_to_segment(p: &Point, a: &Point, b: &Point) -> f32 {
    let ab = *b - *a;
    let len_sq = ab.x.mul_add(ab.x, ab.y * ab.y);
    if len_sq <= f32::EPSILON {
        return a.distance(p);
    }
    let ap = *p - *a;
    let t = (ap.x.mul_add(ab.x, ap.y * ab.y) / len_sq).clamp(0.0, 1.0);
    let closest = Point::new(ab.x.mul_add(t, a.x), ab.y.mul_add(t, a.y));
    closest.distance(p)
}
