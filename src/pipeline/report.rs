use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    foundation::{core::FrameIndex, error::SpotCheckResult},
    pipeline::run::{EntryOutcome, EntryStage, EntryStatus, RunSummary},
};

/// Machine-readable record of one batch, written next to the spot-check images on request.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RunReport {
    pub successful: usize,
    pub failed: usize,
    pub entries: Vec<EntryReport>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EntryReport {
    pub key: String,
    pub video_name: Option<String>,
    pub frame: Option<FrameIndex>,
    pub stage: EntryStage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RunReport {
    pub fn from_summary(summary: &RunSummary) -> Self {
        Self {
            successful: summary.successful,
            failed: summary.failed,
            entries: summary.outcomes.iter().map(EntryReport::from_outcome).collect(),
        }
    }
}

impl EntryReport {
    fn from_outcome(outcome: &EntryOutcome) -> Self {
        let (output, error_kind, error) = match &outcome.status {
            EntryStatus::Succeeded { output } => (Some(output.clone()), None, None),
            EntryStatus::Failed { error } => (None, Some(error.kind()), Some(error.to_string())),
        };
        Self {
            key: outcome.key.clone(),
            video_name: outcome.video_name.clone(),
            frame: outcome.frame,
            stage: outcome.stage,
            output,
            error_kind,
            error,
        }
    }
}

pub fn write_report(report: &RunReport, path: &Path) -> SpotCheckResult<()> {
    let json = serde_json::to_string_pretty(report).context("serialize run report")?;
    std::fs::write(path, json)
        .with_context(|| format!("write run report '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/report.rs"]
mod tests;
