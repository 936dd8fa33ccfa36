/// Default remote prefix under which annotated renditions are stored.
pub const DEFAULT_ASSET_BASE: &str = "s3://rellingxgdm-raw/rellingxgdm-raw/rellingxgdm-raw/CLIPPED";
pub const ANNOTATED_SUFFIX: &str = "_annotated_720p";
pub const VIDEO_EXT: &str = "mp4";

/// Remote path of a video asset.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AssetLocator(String);

impl AssetLocator {
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    /// `{base}/{category}/{video}/{video}_annotated_720p.mp4`
    pub fn annotated_720p(base: &str, category: &str, video_name: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self(format!(
            "{base}/{category}/{video_name}/{}",
            annotated_file_name(video_name)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the locator must be presigned before ffmpeg can read it.
    pub fn is_s3(&self) -> bool {
        self.0.starts_with("s3://")
    }
}

impl std::fmt::Display for AssetLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn annotated_file_name(video_name: &str) -> String {
    format!("{video_name}{ANNOTATED_SUFFIX}.{VIDEO_EXT}")
}

#[cfg(test)]
#[path = "../../tests/unit/fetch/locator.rs"]
mod tests;
