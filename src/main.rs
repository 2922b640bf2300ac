mod batch;
mod error;
mod output;
mod segmentation;
mod source;

use anyhow::Result;
use batch::{BatchReport, Job, Manifest};
use clap::Parser;
use output::PngFileSink;
use source::FileSource;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML manifest listing input/output pairs
    /// If not provided, processes the built-in logo list
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Pixels with red, green and blue all above this become transparent
    /// Overrides the manifest value (default 240)
    #[arg(short, long, allow_negative_numbers = true)]
    threshold: Option<i32>,

    /// Write every output file into this directory instead
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let manifest = match &args.manifest {
        Some(path) => {
            tracing::info!("Loading manifest from {}", path.display());
            Manifest::load(path)?
        }
        None => Manifest::default(),
    };

    let (threshold, jobs) = plan(&args, manifest);

    for output in batch::colliding_outputs(&jobs) {
        tracing::warn!("Several jobs write to {}; the last one wins", output.display());
    }

    if !(0..=255).contains(&threshold) {
        tracing::warn!("Threshold {} is outside 0-255", threshold);
    }

    let report = batch::run_batch(
        &jobs,
        threshold,
        &mut FileSource::new(),
        &mut PngFileSink::new(),
    );

    for outcome in &report.outcomes {
        println!("{}", outcome.report_line());
    }

    Ok(ExitCode::from(exit_status(&report)))
}

/// Apply command-line overrides to the manifest
fn plan(args: &Args, manifest: Manifest) -> (i32, Vec<Job>) {
    let threshold = args.threshold.unwrap_or(manifest.threshold);
    let jobs = match &args.output_dir {
        Some(dir) => manifest.jobs.iter().map(|job| job.rebased(dir)).collect(),
        None => manifest.jobs,
    };
    (threshold, jobs)
}

/// 0 when every job was processed, 1 otherwise
fn exit_status(report: &BatchReport) -> u8 {
    if report.all_succeeded() {
        0
    } else {
        1
    }
}
