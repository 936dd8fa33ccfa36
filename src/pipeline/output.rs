use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{foundation::error::SpotCheckResult, render::Frame};

pub const SPOT_CHECK_SUFFIX: &str = "_annotated_spot_check";
pub const TEMP_FRAME_SUFFIX: &str = "_frame_temp";
pub const IMAGE_EXT: &str = "png";

pub fn spot_check_path(output_dir: &Path, video_name: &str) -> PathBuf {
    output_dir.join(format!("{video_name}{SPOT_CHECK_SUFFIX}.{IMAGE_EXT}"))
}

/// Per-video scratch path for the extracted frame.
pub fn temp_frame_path(output_dir: &Path, video_name: &str) -> PathBuf {
    output_dir.join(format!("{video_name}{TEMP_FRAME_SUFFIX}.{IMAGE_EXT}"))
}

pub fn ensure_output_dir(dir: &Path) -> SpotCheckResult<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory '{}'", dir.display()))?;
    Ok(())
}

pub fn save_spot_check(frame: &Frame, path: &Path) -> SpotCheckResult<()> {
    frame
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/output.rs"]
mod tests;
