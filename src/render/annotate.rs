use crate::{
    annotation::model::{MarkerStyle, PointCategory, PointSet},
    foundation::core::{Point, Rgb8},
    render::{
        Frame,
        draw::{PixelRect, fill_disc, fill_rect, in_bounds, stroke_ring, thick_line},
    },
};

pub const MARKER_RADIUS: i64 = 12;
pub const MARKER_RING_THICKNESS: i64 = 2;
pub const PLUS_HALF_LENGTH: i64 = 6;
pub const PLUS_HALF_WIDTH: i64 = 1;
pub const CROSS_HALF_SPAN: i64 = 12;
pub const CROSS_THICKNESS: i64 = 3;

/// Truncate an annotation coordinate to its pixel position (toward zero).
pub fn pixel_position(p: Point) -> (i64, i64) {
    (p.x as i64, p.y as i64)
}

/// Draw every recognized category of `points` onto `frame`, in [`PointCategory::ALL`] order.
///
/// The frame is updated in place. Points whose pixel position lies outside the frame are
/// skipped silently. The returned marker count is for diagnostics only.
pub fn render_annotations(frame: &mut Frame, points: &PointSet) -> usize {
    let mut drawn = 0usize;
    for category in PointCategory::ALL {
        let Some(pts) = points.points(category) else {
            continue;
        };
        for &p in pts {
            let (x, y) = pixel_position(p);
            if !in_bounds(frame, x, y) {
                continue;
            }
            draw_marker(frame, x, y, category.style(), category.color());
            drawn += 1;
        }
    }
    drawn
}

pub fn draw_marker(frame: &mut Frame, x: i64, y: i64, style: MarkerStyle, color: Rgb8) {
    match style {
        MarkerStyle::Positive => {
            fill_disc(frame, x, y, MARKER_RADIUS, color);
            stroke_ring(frame, x, y, MARKER_RADIUS, MARKER_RING_THICKNESS, Rgb8::WHITE);
            draw_plus(frame, x, y, Rgb8::WHITE);
        }
        MarkerStyle::Negative => {
            let s = CROSS_HALF_SPAN;
            thick_line(frame, (x - s, y - s), (x + s, y + s), CROSS_THICKNESS, color);
            thick_line(frame, (x + s, y - s), (x - s, y + s), CROSS_THICKNESS, color);
        }
    }
}

fn draw_plus(frame: &mut Frame, x: i64, y: i64, color: Rgb8) {
    let (l, w) = (PLUS_HALF_LENGTH, PLUS_HALF_WIDTH);
    fill_rect(frame, PixelRect::new(x - l, y - w, x + l, y + w), color);
    fill_rect(frame, PixelRect::new(x - w, y - l, x + w, y + l), color);
}

#[cfg(test)]
#[path = "../../tests/unit/render/annotate.rs"]
mod tests;
