use crate::{
    foundation::error::{SpotCheckError, SpotCheckResult},
    render::Frame,
};

pub type PremulRgba8 = [u8; 4];

/// Source-over of a premultiplied pixel onto an opaque RGB pixel.
pub fn over_rgb(dst: [u8; 3], src: PremulRgba8) -> [u8; 3] {
    if src[3] == 0 {
        return dst;
    }
    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 3];
    for i in 0..3 {
        out[i] = src[i].saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}

/// Composite a premultiplied RGBA8 layer of `width × height` onto `frame` with its top-left at
/// `(x, y)`. Layer pixels that fall outside the frame are dropped.
pub fn over_layer_in_place(
    frame: &mut Frame,
    x: i64,
    y: i64,
    width: u32,
    height: u32,
    layer: &[u8],
) -> SpotCheckResult<()> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| SpotCheckError::validation("layer buffer size overflow"))?;
    if layer.len() != expected_len {
        return Err(SpotCheckError::validation(
            "over_layer_in_place expects layer matching width*height*4",
        ));
    }

    let (fw, fh) = (i64::from(frame.width()), i64::from(frame.height()));
    for (i, s) in layer.chunks_exact(4).enumerate() {
        if s[3] == 0 {
            continue;
        }
        let lx = (i as i64) % i64::from(width);
        let ly = (i as i64) / i64::from(width);
        let (fx, fy) = (x + lx, y + ly);
        if fx < 0 || fy < 0 || fx >= fw || fy >= fh {
            continue;
        }
        let px = frame.get_pixel_mut(fx as u32, fy as u32);
        px.0 = over_rgb(px.0, [s[0], s[1], s[2], s[3]]);
    }
    Ok(())
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
