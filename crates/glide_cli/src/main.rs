//! Glide CLI
//!
//! Runs the easing scene headlessly for a fixed number of frames and
//! optionally dumps the primitives emitted on the last frame as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use glide_app::{HeadlessRunConfig, HeadlessRuntime, Scene, SceneConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Headless driver for the Glide easing scene
#[derive(Parser, Debug)]
#[command(name = "glide")]
#[command(about = "Run the Glide easing scene headlessly")]
#[command(version)]
struct Args {
    /// Scene configuration file (TOML); built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to run
    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    /// Tick counter value of the first frame
    #[arg(long, default_value_t = 0)]
    first_tick: u64,

    /// Write the last frame's primitives as JSON to this path
    #[arg(short, long)]
    dump: Option<PathBuf>,

    /// Write the run report (totals plus last frame) as JSON to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };

    if args.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let mut scene = Scene::new(&config).context("Failed to build scene")?;
    let cfg = HeadlessRunConfig {
        max_frames: args.frames,
        first_tick: args.first_tick,
        ..Default::default()
    };
    let report = HeadlessRuntime::run(cfg, &mut scene, |_, _| {})?;

    tracing::info!(
        frames = report.frames,
        last_tick = report.last_tick,
        rects = report.totals.rects,
        line_sets = report.totals.line_sets,
        segments = report.totals.segments,
        labels = report.totals.labels,
        "run complete"
    );

    if let Some(path) = &args.dump {
        let payload = serde_json::to_string_pretty(&report.last_frame)?;
        std::fs::write(path, payload)
            .with_context(|| format!("Failed to write frame dump to {}", path.display()))?;
        tracing::info!(path = %path.display(), "frame dump written");
    }

    if let Some(path) = &args.report {
        report
            .write_to_path(path)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        tracing::info!(path = %path.display(), "report written");
    }

    Ok(())
}
