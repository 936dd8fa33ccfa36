use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser, Debug)]
#[command(
    name = "spotcheck",
    version,
    about = "Generate spot-check overlays for _annotated_720p videos"
)]
struct Cli {
    /// Path to the JSON annotation file.
    #[arg(long = "json", default_value = spotcheck::DEFAULT_INPUT_PATH)]
    json: PathBuf,

    /// Output directory for spot check images.
    #[arg(long, default_value = spotcheck::DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Remote prefix the `{category}/{video}/{video}_annotated_720p.mp4` layout hangs off.
    #[arg(long, default_value = spotcheck::DEFAULT_ASSET_BASE)]
    asset_base: String,

    /// Frame rate used to turn frame indices into seek timestamps.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// ffmpeg binary used for frame extraction.
    #[arg(long = "ffmpeg", default_value = "ffmpeg")]
    ffmpeg_bin: PathBuf,

    /// aws CLI binary used to presign s3:// locators.
    #[arg(long = "aws", default_value = "aws")]
    aws_bin: PathBuf,

    /// Exit with status 2 when any entry failed.
    #[arg(long, default_value_t = false)]
    fail_on_error: bool,

    /// Write a JSON report of every entry's outcome to this path.
    #[arg(long)]
    report: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<spotcheck::SpotCheckConfig> {
        Ok(spotcheck::SpotCheckConfig {
            input_path: self.json,
            output_dir: self.output,
            asset_base: self.asset_base,
            fps: spotcheck::Fps::new(self.fps, 1)?,
            ffmpeg_bin: self.ffmpeg_bin,
            aws_bin: self.aws_bin,
            fail_on_error: self.fail_on_error,
            report_path: self.report,
            ..spotcheck::SpotCheckConfig::default()
        })
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spotcheck=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cfg = Cli::parse().into_config()?;

    if !spotcheck::is_tool_on_path(&cfg.ffmpeg_bin) {
        tracing::warn!(
            "'{}' was not found; every frame extraction will fail",
            cfg.ffmpeg_bin.display()
        );
    }

    let summary = spotcheck::run_spot_checks(&cfg)?;

    println!(
        "DONE: {} successful, {} failed",
        summary.successful, summary.failed
    );

    if cfg.fail_on_error && !summary.all_succeeded() {
        std::process::exit(2);
    }
    Ok(())
}
