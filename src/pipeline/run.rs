use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::{
    annotation::{
        classify::CategoryClassifier,
        model::{AnnotationDocument, AnnotationRecord, VideoEntry},
        resolve::resolve_frame,
    },
    fetch::{
        decode::decode_frame,
        ffmpeg::{FetchRequest, FfmpegFrameFetcher, FrameFetcher, TempArtifact},
        locator::{AssetLocator, annotated_file_name},
    },
    foundation::{
        core::FrameIndex,
        error::{SpotCheckError, SpotCheckResult},
    },
    pipeline::{
        config::SpotCheckConfig,
        output::{ensure_output_dir, save_spot_check, spot_check_path, temp_frame_path},
        report::{RunReport, write_report},
    },
    render::{annotate::render_annotations, legend::add_legend, text::TextRasterizer},
};

/// Last stage an entry completed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStage {
    #[default]
    Received,
    Classified,
    FrameResolved,
    Fetched,
    Rendered,
    Persisted,
}

impl std::fmt::Display for EntryStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Received => "received",
            Self::Classified => "classified",
            Self::FrameResolved => "frame_resolved",
            Self::Fetched => "fetched",
            Self::Rendered => "rendered",
            Self::Persisted => "persisted",
        };
        f.write_str(s)
    }
}

#[derive(Debug)]
pub enum EntryStatus {
    Succeeded { output: PathBuf },
    Failed { error: SpotCheckError },
}

/// What happened to one document entry.
#[derive(Debug)]
pub struct EntryOutcome {
    pub key: String,
    pub video_name: Option<String>,
    pub frame: Option<FrameIndex>,
    pub stage: EntryStage,
    pub status: EntryStatus,
}

impl EntryOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.status, EntryStatus::Succeeded { .. })
    }

    pub fn error(&self) -> Option<&SpotCheckError> {
        match &self.status {
            EntryStatus::Failed { error } => Some(error),
            EntryStatus::Succeeded { .. } => None,
        }
    }
}

/// Counters for one batch invocation, plus the per-entry detail behind them.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub successful: usize,
    pub failed: usize,
    pub outcomes: Vec<EntryOutcome>,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.successful + self.failed
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }

    fn record(&mut self, outcome: EntryOutcome) {
        if outcome.is_success() {
            self.successful += 1;
        } else {
            self.failed += 1;
        }
        self.outcomes.push(outcome);
    }
}

/// Sequential classify → resolve → fetch → render → persist over every document entry.
///
/// Entry failures are logged and counted; they never stop the batch.
pub struct SpotCheckPipeline<F> {
    output_dir: PathBuf,
    asset_base: String,
    classifier: CategoryClassifier,
    fetcher: F,
    text: TextRasterizer,
}

impl<F: FrameFetcher> SpotCheckPipeline<F> {
    pub fn new(
        output_dir: impl Into<PathBuf>,
        asset_base: impl Into<String>,
        fetcher: F,
        text: TextRasterizer,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            asset_base: asset_base.into(),
            classifier: CategoryClassifier::default(),
            fetcher,
            text,
        }
    }

    pub fn with_classifier(mut self, classifier: CategoryClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Process every entry of `doc` in document order.
    ///
    /// Only batch setup (the output directory) can fail the whole run.
    pub fn run(&self, doc: &AnnotationDocument) -> SpotCheckResult<RunSummary> {
        ensure_output_dir(&self.output_dir)?;
        tracing::info!("found {} video(s) in annotations", doc.len());

        let mut summary = RunSummary::default();
        for (key, value) in doc.iter() {
            summary.record(self.process_entry(key, value));
        }

        tracing::info!(
            successful = summary.successful,
            failed = summary.failed,
            "batch finished"
        );
        Ok(summary)
    }

    #[tracing::instrument(skip(self, value))]
    pub fn process_entry(&self, key: &str, value: &Value) -> EntryOutcome {
        let mut progress = Progress::default();
        let status = match self.try_process(key, value, &mut progress) {
            Ok(output) => {
                tracing::info!(output = %output.display(), "saved");
                EntryStatus::Succeeded { output }
            }
            Err(error) => {
                match &error {
                    SpotCheckError::Other(inner) => {
                        tracing::error!(stage = %progress.stage, "unhandled failure: {inner:?}");
                    }
                    SpotCheckError::UnclassifiableKey { .. } => {
                        tracing::warn!("{error}, skipping");
                    }
                    _ => tracing::error!(stage = %progress.stage, "{error}"),
                }
                EntryStatus::Failed { error }
            }
        };

        EntryOutcome {
            key: key.to_string(),
            video_name: progress.video_name,
            frame: progress.frame,
            stage: progress.stage,
            status,
        }
    }

    fn try_process(
        &self,
        key: &str,
        value: &Value,
        progress: &mut Progress,
    ) -> SpotCheckResult<PathBuf> {
        let classified = self.classifier.classify(key)?;
        progress.video_name = Some(classified.video_name.clone());
        progress.stage = EntryStage::Classified;
        let entry = VideoEntry {
            key: key.to_string(),
            category: classified.category,
            video_name: classified.video_name,
            record: AnnotationRecord::from_value(value)?,
        };
        tracing::info!(category = %entry.category, "processing {}", entry.video_name);

        let resolved = resolve_frame(&entry.record)?;
        progress.frame = Some(resolved.frame);
        progress.stage = EntryStage::FrameResolved;
        tracing::info!("target frame: {}", resolved.frame);

        let locator =
            AssetLocator::annotated_720p(&self.asset_base, &entry.category, &entry.video_name);
        tracing::info!("extracting frame from {}", annotated_file_name(&entry.video_name));

        // Removed on every path out of this function.
        let artifact = TempArtifact::new(temp_frame_path(&self.output_dir, &entry.video_name));
        let bytes = self.fetcher.fetch_frame(&FetchRequest {
            locator: &locator,
            frame: resolved.frame,
            artifact_path: artifact.path(),
        })?;
        let mut frame = decode_frame(&bytes)?;
        drop(artifact);
        progress.stage = EntryStage::Fetched;
        tracing::info!("frame size: {}x{}", frame.width(), frame.height());

        let drawn = render_annotations(&mut frame, &resolved.points);
        add_legend(&mut frame, &entry.video_name, resolved.frame, &self.text);
        progress.stage = EntryStage::Rendered;
        tracing::debug!(
            drawn,
            total = resolved.points.total_points(),
            "markers drawn"
        );

        let output = spot_check_path(&self.output_dir, &entry.video_name);
        save_spot_check(&frame, &output)?;
        progress.stage = EntryStage::Persisted;
        Ok(output)
    }
}

#[derive(Debug, Default)]
struct Progress {
    video_name: Option<String>,
    frame: Option<FrameIndex>,
    stage: EntryStage,
}

/// Run a full batch with the system `ffmpeg`/`aws` tools and system fonts.
pub fn run_spot_checks(config: &SpotCheckConfig) -> SpotCheckResult<RunSummary> {
    config.validate()?;
    let input = config.resolve_input_path()?;
    tracing::info!("loading annotations from: {}", input.display());
    let doc = AnnotationDocument::from_path(&input)?;

    let pipeline = SpotCheckPipeline::new(
        config.output_dir.clone(),
        config.asset_base.clone(),
        FfmpegFrameFetcher::new(config.fetch_config()),
        TextRasterizer::with_system_fonts(),
    );
    let summary = pipeline.run(&doc)?;

    if let Some(path) = &config.report_path {
        write_report(&RunReport::from_summary(&summary), path)?;
        tracing::info!(path = %path.display(), "run report written");
    }
    Ok(summary)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/run.rs"]
mod tests;
