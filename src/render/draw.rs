//! Integer raster primitives for RGB frames.
//!
//! Nothing here antialiases and every primitive clips against the frame, so drawing is
//! deterministic and pixels outside a shape's footprint are never written.

use crate::{foundation::core::Rgb8, render::Frame};

/// Inclusive pixel rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl PixelRect {
    pub const fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(self) -> i64 {
        self.x1 - self.x0 + 1
    }

    pub fn height(self) -> i64 {
        self.y1 - self.y0 + 1
    }

    pub fn contains(self, x: i64, y: i64) -> bool {
        self.x0 <= x && x <= self.x1 && self.y0 <= y && y <= self.y1
    }

    /// Intersection with the frame, or `None` when fully outside.
    pub fn clip_to(self, frame: &Frame) -> Option<PixelRect> {
        let x0 = self.x0.max(0);
        let y0 = self.y0.max(0);
        let x1 = self.x1.min(i64::from(frame.width()) - 1);
        let y1 = self.y1.min(i64::from(frame.height()) - 1);
        (x0 <= x1 && y0 <= y1).then_some(PixelRect { x0, y0, x1, y1 })
    }
}

pub fn in_bounds(frame: &Frame, x: i64, y: i64) -> bool {
    x >= 0 && y >= 0 && x < i64::from(frame.width()) && y < i64::from(frame.height())
}

/// Set every pixel of the bounding box for which `inside(dx, dy)` holds, `(dx, dy)` relative to
/// `(cx, cy)`.
fn fill_where(
    frame: &mut Frame,
    bounds: PixelRect,
    cx: i64,
    cy: i64,
    color: Rgb8,
    inside: impl Fn(i64, i64) -> bool,
) {
    let Some(b) = bounds.clip_to(frame) else {
        return;
    };
    let px = color.to_pixel();
    for y in b.y0..=b.y1 {
        for x in b.x0..=b.x1 {
            if inside(x - cx, y - cy) {
                frame.put_pixel(x as u32, y as u32, px);
            }
        }
    }
}

pub fn fill_disc(frame: &mut Frame, cx: i64, cy: i64, radius: i64, color: Rgb8) {
    let r2 = radius * radius;
    let bounds = PixelRect::new(cx - radius, cy - radius, cx + radius, cy + radius);
    fill_where(frame, bounds, cx, cy, color, |dx, dy| dx * dx + dy * dy <= r2);
}

/// Circle outline of `thickness` pixels centred on `radius`.
pub fn stroke_ring(frame: &mut Frame, cx: i64, cy: i64, radius: i64, thickness: i64, color: Rgb8) {
    let half = thickness as f64 / 2.0;
    let inner = (radius as f64 - half).max(0.0);
    let outer = radius as f64 + half;
    let (inner2, outer2) = (inner * inner, outer * outer);
    let reach = outer.ceil() as i64;
    let bounds = PixelRect::new(cx - reach, cy - reach, cx + reach, cy + reach);
    fill_where(frame, bounds, cx, cy, color, |dx, dy| {
        let d2 = (dx * dx + dy * dy) as f64;
        inner2 <= d2 && d2 <= outer2
    });
}

/// Segment from `(x0, y0)` to `(x1, y1)`; a pixel is covered when its centre lies within
/// `thickness / 2` of the segment.
pub fn thick_line(
    frame: &mut Frame,
    (x0, y0): (i64, i64),
    (x1, y1): (i64, i64),
    thickness: i64,
    color: Rgb8,
) {
    let half = thickness as f64 / 2.0;
    let reach = half.ceil() as i64;
    let bounds = PixelRect::new(
        x0.min(x1) - reach,
        y0.min(y1) - reach,
        x0.max(x1) + reach,
        y0.max(y1) + reach,
    );

    let (ax, ay) = (x0 as f64, y0 as f64);
    let (vx, vy) = ((x1 - x0) as f64, (y1 - y0) as f64);
    let len2 = vx * vx + vy * vy;
    let half2 = half * half;

    fill_where(frame, bounds, 0, 0, color, |px, py| {
        let (px, py) = (px as f64, py as f64);
        let t = if len2 == 0.0 {
            0.0
        } else {
            (((px - ax) * vx + (py - ay) * vy) / len2).clamp(0.0, 1.0)
        };
        let (dx, dy) = (px - (ax + t * vx), py - (ay + t * vy));
        dx * dx + dy * dy <= half2
    });
}

pub fn fill_rect(frame: &mut Frame, rect: PixelRect, color: Rgb8) {
    fill_where(frame, rect, 0, 0, color, |_, _| true);
}

/// One-pixel rectangle border.
pub fn stroke_rect(frame: &mut Frame, rect: PixelRect, color: Rgb8) {
    fill_where(frame, rect, 0, 0, color, |x, y| {
        x == rect.x0 || x == rect.x1 || y == rect.y0 || y == rect.y1
    });
}

#[cfg(test)]
#[path = "../../tests/unit/render/draw.rs"]
mod tests;
