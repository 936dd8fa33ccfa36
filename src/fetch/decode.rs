use crate::{
    foundation::error::{SpotCheckError, SpotCheckResult},
    render::Frame,
};

/// Decode an extracted frame artifact into an RGB frame.
pub fn decode_frame(bytes: &[u8]) -> SpotCheckResult<Frame> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| SpotCheckError::decode(format!("failed to load extracted frame: {e}")))?;
    let frame = dyn_img.to_rgb8();
    if frame.width() == 0 || frame.height() == 0 {
        return Err(SpotCheckError::decode("extracted frame has zero size"));
    }
    Ok(frame)
}

#[cfg(test)]
#[path = "../../tests/unit/fetch/decode.rs"]
mod tests;
