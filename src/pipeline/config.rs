use std::path::{Path, PathBuf};

use crate::{
    fetch::{
        ffmpeg::{DEFAULT_PRESIGN_EXPIRY_SECS, FfmpegFetchConfig},
        locator::DEFAULT_ASSET_BASE,
    },
    foundation::{
        core::Fps,
        error::{SpotCheckError, SpotCheckResult},
    },
};

pub const DEFAULT_INPUT_PATH: &str = "perfect_frame_annotation.json";
pub const DEFAULT_OUTPUT_DIR: &str = "/var/tmp/spotcheck/final_spot_checks";

/// Everything a batch run needs to know.
#[derive(Clone, Debug, PartialEq)]
pub struct SpotCheckConfig {
    /// Annotation document. Relative paths fall back to `output_dir/<path>`.
    pub input_path: PathBuf,
    /// Where spot-check images (and temporary frames) are written.
    pub output_dir: PathBuf,
    /// Prefix of the remote asset layout.
    pub asset_base: String,
    pub fps: Fps,
    pub presign_expiry_secs: u64,
    pub ffmpeg_bin: PathBuf,
    pub aws_bin: PathBuf,
    /// Exit non-zero when any entry failed.
    pub fail_on_error: bool,
    /// Optional JSON run report.
    pub report_path: Option<PathBuf>,
}

impl Default for SpotCheckConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            asset_base: DEFAULT_ASSET_BASE.to_string(),
            fps: Fps::default(),
            presign_expiry_secs: DEFAULT_PRESIGN_EXPIRY_SECS,
            ffmpeg_bin: PathBuf::from("ffmpeg"),
            aws_bin: PathBuf::from("aws"),
            fail_on_error: false,
            report_path: None,
        }
    }
}

impl SpotCheckConfig {
    pub fn validate(&self) -> SpotCheckResult<()> {
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(SpotCheckError::validation("fps must be non-zero"));
        }
        if self.presign_expiry_secs == 0 {
            return Err(SpotCheckError::validation(
                "presign expiry must be at least one second",
            ));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(SpotCheckError::validation("output directory must be set"));
        }
        if self.asset_base.trim().is_empty() {
            return Err(SpotCheckError::validation("asset base must be set"));
        }
        Ok(())
    }

    /// Locate the annotation document.
    ///
    /// Absolute paths are taken as-is. A relative path is tried against the working directory
    /// first, then against the output directory.
    pub fn resolve_input_path(&self) -> SpotCheckResult<PathBuf> {
        resolve_input_path(&self.input_path, &self.output_dir)
    }

    pub fn fetch_config(&self) -> FfmpegFetchConfig {
        FfmpegFetchConfig {
            ffmpeg_bin: self.ffmpeg_bin.clone(),
            aws_bin: self.aws_bin.clone(),
            fps: self.fps,
            presign_expiry_secs: self.presign_expiry_secs,
        }
    }
}

fn resolve_input_path(input: &Path, output_dir: &Path) -> SpotCheckResult<PathBuf> {
    if input.is_absolute() || input.exists() {
        return Ok(input.to_path_buf());
    }
    let in_output = output_dir.join(input);
    if in_output.exists() {
        return Ok(in_output);
    }
    Err(SpotCheckError::validation(format!(
        "annotation document not found: '{}'",
        input.display()
    )))
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/config.rs"]
mod tests;
