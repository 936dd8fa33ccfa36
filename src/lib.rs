//! spotcheck renders human-reviewable "spot check" images for point-annotated videos.
//!
//! For every entry of an annotation document it resolves one target frame, pulls that frame
//! out of the remote annotated rendition with the system `ffmpeg`, draws the recorded points with
//! a category-coded legend and writes a PNG for manual QA.
//!
//! # Pipeline overview
//!
//! 1. **Classify**: video key → `(category, video_name)` ([`CategoryClassifier`])
//! 2. **Resolve**: annotation record → target frame + points ([`resolve_frame`])
//! 3. **Fetch**: asset locator + frame → image bytes ([`FrameFetcher`])
//! 4. **Render**: markers ([`render_annotations`]) then the legend panel ([`add_legend`])
//! 5. **Persist**: `{video}_annotated_spot_check.png` in the output directory
//!
//! Entries are processed one at a time. A failing entry is logged and counted, never fatal to
//! the batch; [`RunSummary`] carries the counts back to the caller.
#![forbid(unsafe_code)]

mod annotation;
mod fetch;
mod foundation;
mod pipeline;
mod render;

pub use annotation::classify::{
    CategoryClassifier, CategoryRule, Classified, KNOWN_CATEGORY_PREFIXES, SEQUENCE_MARKER,
};
pub use annotation::model::{
    AnnotationDocument, AnnotationRecord, MarkerStyle, PointCategory, PointSet, VideoEntry,
};
pub use annotation::resolve::{ResolvedFrame, resolve_frame};
pub use fetch::decode::decode_frame;
pub use fetch::ffmpeg::{
    DEFAULT_PRESIGN_EXPIRY_SECS, FetchRequest, FfmpegFetchConfig, FfmpegFrameFetcher,
    FrameFetcher, TempArtifact, frame_timestamp_secs, is_ffmpeg_on_path, is_tool_on_path,
};
pub use fetch::locator::{AssetLocator, DEFAULT_ASSET_BASE, annotated_file_name};
pub use foundation::core::{Fps, FrameIndex, Point, Rgb8};
pub use foundation::error::{SpotCheckError, SpotCheckResult};
pub use pipeline::config::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_DIR, SpotCheckConfig};
pub use pipeline::output::{
    ensure_output_dir, save_spot_check, spot_check_path, temp_frame_path,
};
pub use pipeline::report::{EntryReport, RunReport, write_report};
pub use pipeline::run::{
    EntryOutcome, EntryStage, EntryStatus, RunSummary, SpotCheckPipeline, run_spot_checks,
};
pub use render::Frame;
pub use render::annotate::{draw_marker, pixel_position, render_annotations};
pub use render::draw::PixelRect;
pub use render::legend::{LEGEND_ENTRIES, LEGEND_PANEL, LegendEntry, SOURCE_TAG, add_legend};
pub use render::text::{TextRasterizer, TextSpan};
