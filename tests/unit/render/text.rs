use super::*;

fn span(text: &str) -> TextSpan {
    TextSpan {
        text: text.to_string(),
        x: 15.0,
        baseline_y: 30.0,
        font_size: 14.0,
        color: Rgb8::WHITE,
    }
}

#[test]
fn svg_escapes_text_and_offsets_region() {
    let svg = spans_to_svg(
        PixelRect::new(10, 10, 449, 129),
        440,
        120,
        &[span("a<b & \"c\"")],
    );
    assert!(svg.contains("a&lt;b &amp; &quot;c&quot;"));
    assert!(svg.contains("translate(-10,-10)"));
    assert!(svg.contains(r#"width="440" height="120""#));
    assert!(svg.contains("fill=\"rgb(255,255,255)\""));
}

#[test]
fn generated_svg_parses() {
    let svg = spans_to_svg(PixelRect::new(0, 0, 99, 49), 100, 50, &[span("Frame: 12")]);
    usvg::Tree::from_str(&svg, &usvg::Options::default()).unwrap();
}

#[test]
fn without_fonts_text_is_skipped() {
    let text = TextRasterizer::without_fonts();
    assert!(!text.has_fonts());

    let mut frame = Frame::from_pixel(64, 64, image::Rgb([0, 0, 0]));
    let before = frame.clone();
    text.draw_spans(&mut frame, PixelRect::new(0, 0, 63, 63), &[span("hello")])
        .unwrap();
    assert_eq!(frame, before);
}

#[test]
fn text_never_leaves_its_region() {
    let text = TextRasterizer::with_system_fonts();
    let mut frame = Frame::from_pixel(200, 80, image::Rgb([0, 0, 0]));
    let region = PixelRect::new(10, 10, 120, 60);
    text.draw_spans(&mut frame, region, &[span("Spot check WWWWWWWWWWWWWWW")])
        .unwrap();

    for (x, y, p) in frame.enumerate_pixels() {
        if !region.contains(i64::from(x), i64::from(y)) {
            assert_eq!(p.0, [0, 0, 0], "pixel ({x},{y}) outside region was written");
        }
    }
}

#[test]
fn control_characters_are_dropped_from_svg_text() {
    assert_eq!(escape_xml("clip\u{1}x\u{1f}\ty\u{FFFE}"), "clipx\ty");

    let svg = spans_to_svg(PixelRect::new(0, 0, 99, 49), 100, 50, &[span("baking/clip\u{1}x")]);
    usvg::Tree::from_str(&svg, &usvg::Options::default()).unwrap();
}

#[test]
fn control_character_label_still_renders() {
    let text = TextRasterizer::with_system_fonts();
    let mut frame = Frame::from_pixel(200, 80, image::Rgb([0, 0, 0]));
    text.draw_spans(&mut frame, PixelRect::new(0, 0, 199, 79), &[span("clip\u{1}x")])
        .unwrap();
}
