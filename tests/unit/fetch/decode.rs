use std::io::Cursor;

use super::*;

#[test]
fn decode_png_drops_alpha_and_keeps_dimensions() {
    let img = image::RgbaImage::from_raw(2, 1, vec![10, 20, 30, 255, 40, 50, 60, 128]).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let frame = decode_frame(&buf).unwrap();
    assert_eq!(frame.dimensions(), (2, 1));
    assert_eq!(frame.get_pixel(0, 0).0, [10, 20, 30]);
}

#[test]
fn garbage_bytes_are_a_decode_error() {
    let err = decode_frame(b"not an image").unwrap_err();
    assert!(matches!(err, SpotCheckError::Decode(_)));
}
