use std::{
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use crate::{
    fetch::locator::AssetLocator,
    foundation::{
        core::{Fps, FrameIndex},
        error::{SpotCheckError, SpotCheckResult},
    },
};

/// Lifetime of a presigned URL, in seconds.
pub const DEFAULT_PRESIGN_EXPIRY_SECS: u64 = 3600;

/// Seek position for `frame` at the assumed constant frame rate.
pub fn frame_timestamp_secs(frame: FrameIndex, fps: Fps) -> f64 {
    fps.frames_to_secs(frame)
}

pub fn is_ffmpeg_on_path() -> bool {
    is_tool_on_path(Path::new("ffmpeg"))
}

pub fn is_tool_on_path(bin: &Path) -> bool {
    Command::new(bin)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// One frame extraction: where to read from, which frame, and where the extracted image lands.
#[derive(Clone, Copy, Debug)]
pub struct FetchRequest<'a> {
    pub locator: &'a AssetLocator,
    pub frame: FrameIndex,
    pub artifact_path: &'a Path,
}

/// Pulls a single frame out of a remote video.
pub trait FrameFetcher {
    /// Returns the encoded image bytes of the requested frame.
    fn fetch_frame(&self, req: &FetchRequest<'_>) -> SpotCheckResult<Vec<u8>>;
}

#[derive(Clone, Debug)]
pub struct FfmpegFetchConfig {
    pub ffmpeg_bin: PathBuf,
    pub aws_bin: PathBuf,
    pub fps: Fps,
    pub presign_expiry_secs: u64,
}

impl Default for FfmpegFetchConfig {
    fn default() -> Self {
        Self {
            ffmpeg_bin: PathBuf::from("ffmpeg"),
            aws_bin: PathBuf::from("aws"),
            fps: Fps::default(),
            presign_expiry_secs: DEFAULT_PRESIGN_EXPIRY_SECS,
        }
    }
}

/// Extracts frames with the system `ffmpeg`, presigning `s3://` locators through the `aws` CLI.
#[derive(Clone, Debug, Default)]
pub struct FfmpegFrameFetcher {
    cfg: FfmpegFetchConfig,
}

impl FfmpegFrameFetcher {
    pub fn new(cfg: FfmpegFetchConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &FfmpegFetchConfig {
        &self.cfg
    }

    /// Turn a locator into something ffmpeg can open.
    pub fn input_url(&self, locator: &AssetLocator) -> SpotCheckResult<String> {
        if !locator.is_s3() {
            return Ok(locator.as_str().to_string());
        }

        let out = Command::new(&self.cfg.aws_bin)
            .args(["s3", "presign", locator.as_str(), "--expires-in"])
            .arg(self.cfg.presign_expiry_secs.to_string())
            .output()
            .map_err(|e| SpotCheckError::fetch(format!("failed to run aws presign: {e}")))?;

        if !out.status.success() {
            return Err(SpotCheckError::fetch(format!(
                "failed to presign '{locator}': {}",
                String::from_utf8_lossy(&out.stderr).trim()
            )));
        }

        let url = String::from_utf8_lossy(&out.stdout).trim().to_string();
        if url.is_empty() {
            return Err(SpotCheckError::fetch(format!(
                "aws presign returned an empty URL for '{locator}'"
            )));
        }
        Ok(url)
    }

    fn extract_args(&self, url: &str, frame: FrameIndex, artifact_path: &Path) -> Vec<String> {
        let ts = frame_timestamp_secs(frame, self.cfg.fps);
        vec![
            "-y".to_string(),
            "-v".to_string(),
            "error".to_string(),
            "-ss".to_string(),
            format!("{ts:.9}"),
            "-i".to_string(),
            url.to_string(),
            "-frames:v".to_string(),
            "1".to_string(),
            "-f".to_string(),
            "image2".to_string(),
            artifact_path.display().to_string(),
        ]
    }
}

impl FrameFetcher for FfmpegFrameFetcher {
    fn fetch_frame(&self, req: &FetchRequest<'_>) -> SpotCheckResult<Vec<u8>> {
        // A leftover artifact from an interrupted run must not pass for fresh output.
        clear_stale_artifact(req.artifact_path)?;
        let url = self.input_url(req.locator)?;

        let out = Command::new(&self.cfg.ffmpeg_bin)
            .args(self.extract_args(&url, req.frame, req.artifact_path))
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                SpotCheckError::fetch(format!(
                    "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
                ))
            })?;

        if !out.status.success() {
            return Err(SpotCheckError::fetch(format!(
                "ffmpeg exited with status {} for '{}': {}",
                out.status,
                req.locator,
                String::from_utf8_lossy(&out.stderr).trim()
            )));
        }
        if !req.artifact_path.exists() {
            return Err(SpotCheckError::fetch(format!(
                "ffmpeg produced no frame at {} for '{}'",
                req.frame, req.locator
            )));
        }

        std::fs::read(req.artifact_path).map_err(|e| {
            SpotCheckError::fetch(format!(
                "failed to read extracted frame '{}': {e}",
                req.artifact_path.display()
            ))
        })
    }
}

fn clear_stale_artifact(path: &Path) -> SpotCheckResult<()> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "removed stale temp frame");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(SpotCheckError::fetch(format!(
            "failed to clear stale frame '{}': {e}",
            path.display()
        ))),
    }
}

/// Scratch file that is removed when dropped, whatever happened in between.
#[derive(Debug)]
pub struct TempArtifact {
    path: PathBuf,
}

impl TempArtifact {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempArtifact {
    fn drop(&mut self) {
        if !self.path.exists() {
            return;
        }
        if let Err(e) = std::fs::remove_file(&self.path) {
            tracing::warn!(path = %self.path.display(), "failed to remove temp frame: {e}");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fetch/ffmpeg.rs"]
mod tests;
