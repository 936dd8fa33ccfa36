use std::sync::Arc;

use anyhow::Context as _;

use crate::{
    foundation::{
        core::Rgb8,
        error::{SpotCheckError, SpotCheckResult},
    },
    render::{Frame, composite::over_layer_in_place, draw::PixelRect},
};

const FONT_FAMILIES: &str = "DejaVu Sans, Liberation Sans, Arial, Helvetica, sans-serif";

/// One line of text, positioned by its left baseline point in frame coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct TextSpan {
    pub text: String,
    pub x: f32,
    pub baseline_y: f32,
    pub font_size: f32,
    pub color: Rgb8,
}

/// Rasterizes text through `usvg`/`resvg` and composites it onto frames.
///
/// With an empty font database text is skipped and every other overlay still draws.
#[derive(Clone)]
pub struct TextRasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl std::fmt::Debug for TextRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextRasterizer")
            .field("font_faces", &self.fontdb.len())
            .finish()
    }
}

impl TextRasterizer {
    pub fn with_system_fonts() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        Self {
            fontdb: Arc::new(db),
        }
    }

    pub fn without_fonts() -> Self {
        Self {
            fontdb: Arc::new(usvg::fontdb::Database::new()),
        }
    }

    pub fn has_fonts(&self) -> bool {
        !self.fontdb.is_empty()
    }

    /// Draw `spans` onto `frame`; output is restricted to `region`.
    pub fn draw_spans(
        &self,
        frame: &mut Frame,
        region: PixelRect,
        spans: &[TextSpan],
    ) -> SpotCheckResult<()> {
        if spans.is_empty() || !self.has_fonts() {
            return Ok(());
        }
        let (Ok(width), Ok(height)) = (u32::try_from(region.width()), u32::try_from(region.height()))
        else {
            return Ok(());
        };

        let svg = spans_to_svg(region, width, height, spans);
        let opts = usvg::Options {
            fontdb: self.fontdb.clone(),
            font_resolver: make_font_resolver(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(&svg, &opts).context("parse text overlay svg")?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| SpotCheckError::validation("failed to allocate text pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );

        over_layer_in_place(frame, region.x0, region.y0, width, height, pixmap.data())
    }
}

fn spans_to_svg(region: PixelRect, width: u32, height: u32, spans: &[TextSpan]) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    svg.push_str(&format!(
        r#"<g transform="translate({},{})">"#,
        -region.x0, -region.y0
    ));
    for span in spans {
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" font-family="{FONT_FAMILIES}" font-size="{}" fill="{}">{}</text>"#,
            span.x,
            span.baseline_y,
            span.font_size,
            span.color.to_svg_paint(),
            escape_xml(&span.text)
        ));
    }
    svg.push_str("</g></svg>");
    svg
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if is_xml_char(c) => out.push(c),
            _ => {}
        }
    }
    out
}

/// Characters allowed in an XML 1.0 document.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r') || (c >= ' ' && c != '\u{FFFE}' && c != '\u{FFFF}')
}

fn make_font_resolver() -> usvg::FontResolver<'static> {
    use usvg::FontResolver;

    FontResolver {
        select_font: Box::new(|font, fontdb| {
            let mut families = Vec::<usvg::fontdb::Family<'_>>::new();
            for family in font.families() {
                families.push(match family {
                    usvg::FontFamily::Serif => usvg::fontdb::Family::Serif,
                    usvg::FontFamily::SansSerif => usvg::fontdb::Family::SansSerif,
                    usvg::FontFamily::Cursive => usvg::fontdb::Family::Cursive,
                    usvg::FontFamily::Fantasy => usvg::fontdb::Family::Fantasy,
                    usvg::FontFamily::Monospace => usvg::fontdb::Family::Monospace,
                    usvg::FontFamily::Named(s) => usvg::fontdb::Family::Name(s),
                });
            }
            families.push(usvg::fontdb::Family::SansSerif);

            let query = usvg::fontdb::Query {
                families: &families,
                weight: usvg::fontdb::Weight(font.weight()),
                stretch: usvg::fontdb::Stretch::Normal,
                style: usvg::fontdb::Style::Normal,
            };

            if let Some(id) = fontdb.query(&query) {
                return Some(id);
            }
            // Any installed face beats dropping the caption.
            fontdb.faces().next().map(|f| f.id)
        }),
        select_fallback: FontResolver::default_fallback_selector(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
