use crate::{
    foundation::core::{FrameIndex, Rgb8},
    render::{
        Frame,
        draw::{PixelRect, fill_disc, fill_rect, stroke_rect},
        text::{TextRasterizer, TextSpan},
    },
};

/// Panel corners (10, 10) and (450, 130), inclusive.
pub const LEGEND_PANEL: PixelRect = PixelRect::new(10, 10, 450, 130);
pub const LEGEND_DOT_RADIUS: i64 = 8;
/// Which rendition the frames are pulled from.
pub const SOURCE_TAG: &str = "_annotated_720p";

const TITLE_SIZE: f32 = 14.0;
const CAPTION_SIZE: f32 = 11.0;

/// One row of the 2 × 2 legend grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegendEntry {
    pub caption: &'static str,
    pub color: Rgb8,
    pub dot: (i64, i64),
}

pub const LEGEND_ENTRIES: [LegendEntry; 4] = [
    LegendEntry {
        caption: "Obj1 +/-",
        color: Rgb8::MAGENTA,
        dot: (25, 75),
    },
    LegendEntry {
        caption: "Obj2 +/-",
        color: Rgb8::CYAN,
        dot: (150, 75),
    },
    LegendEntry {
        caption: "Positive",
        color: Rgb8::GREEN,
        dot: (25, 100),
    },
    LegendEntry {
        caption: "Negative",
        color: Rgb8::RED,
        dot: (150, 100),
    },
];

pub fn frame_caption(frame_index: FrameIndex) -> String {
    format!("Frame: {frame_index} | Source: {SOURCE_TAG}")
}

/// Draw the information panel over the top-left corner of `frame`.
///
/// Run this after the annotations: the panel is opaque and must end up on top.
///
/// Text failures are logged and leave the panel without captions.
pub fn add_legend(frame: &mut Frame, label: &str, frame_index: FrameIndex, text: &TextRasterizer) {
    fill_rect(frame, LEGEND_PANEL, Rgb8::BLACK);
    stroke_rect(frame, LEGEND_PANEL, Rgb8::WHITE);

    for entry in LEGEND_ENTRIES {
        fill_disc(frame, entry.dot.0, entry.dot.1, LEGEND_DOT_RADIUS, entry.color);
    }

    if let Err(e) = text.draw_spans(frame, LEGEND_PANEL, &legend_spans(label, frame_index)) {
        tracing::warn!(label, "legend text skipped: {e}");
    }
}

fn legend_spans(label: &str, frame_index: FrameIndex) -> Vec<TextSpan> {
    let mut spans = vec![
        TextSpan {
            text: label.to_string(),
            x: 15.0,
            baseline_y: 30.0,
            font_size: TITLE_SIZE,
            color: Rgb8::WHITE,
        },
        TextSpan {
            text: frame_caption(frame_index),
            x: 15.0,
            baseline_y: 50.0,
            font_size: CAPTION_SIZE,
            color: Rgb8::CAPTION_GREY,
        },
    ];
    spans.extend(LEGEND_ENTRIES.iter().map(|e| TextSpan {
        text: e.caption.to_string(),
        x: (e.dot.0 + 15) as f32,
        baseline_y: (e.dot.1 + 3) as f32,
        font_size: CAPTION_SIZE,
        color: e.color,
    }));
    spans
}

#[cfg(test)]
#[path = "../../tests/unit/render/legend.rs"]
mod tests;
