use crate::error::JobError;
use crate::output::OutputSink;
use crate::segmentation::{self, LuminanceThreshold, DEFAULT_THRESHOLD};
use crate::source::ImageSource;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// One input image and where its cut-out goes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Job {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Same job with the output file moved into `dir`
    ///
    /// Only the file name survives, so outputs from different directories
    /// can land on the same path; see [`colliding_outputs`].
    pub fn rebased(&self, dir: &Path) -> Self {
        let name = self.output.file_name().unwrap_or(self.output.as_os_str());
        Self {
            input: self.input.clone(),
            output: dir.join(name),
        }
    }
}

/// Output paths claimed by more than one job, in first-seen order
pub fn colliding_outputs(jobs: &[Job]) -> Vec<&Path> {
    let mut seen = HashSet::new();
    let mut collisions = Vec::new();
    for job in jobs {
        let output = job.output.as_path();
        if !seen.insert(output) && !collisions.contains(&output) {
            collisions.push(output);
        }
    }
    collisions
}

/// The logos processed when no manifest is given
pub fn default_jobs() -> Vec<Job> {
    const LOGO_DIR: &str = "Body Double Backgrounds/Alt Logo's";
    const OUTPUT_DIR: &str = "public/watermarks";

    [
        ("alt logo 1.png", "alt-logo-1-transparent.png"),
        ("alt logo 2.png", "alt-logo-2-transparent.png"),
        ("alt logo 3.png", "alt-logo-3-transparent.png"),
        ("altlogo 4.png", "alt-logo-4-transparent.png"),
    ]
    .into_iter()
    .map(|(input, output)| {
        Job::new(
            Path::new(LOGO_DIR).join(input),
            Path::new(OUTPUT_DIR).join(output),
        )
    })
    .collect()
}

/// Job list loaded from a TOML file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default = "default_threshold")]
    pub threshold: i32,
    #[serde(default)]
    pub jobs: Vec<Job>,
}

fn default_threshold() -> i32 {
    DEFAULT_THRESHOLD
}

impl Manifest {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid manifest {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            jobs: default_jobs(),
        }
    }
}

#[derive(Debug)]
pub enum JobOutcome {
    Processed { input: PathBuf, output: PathBuf },
    Missing { input: PathBuf },
    Failed { input: PathBuf, error: JobError },
}

impl JobOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, JobOutcome::Processed { .. })
    }

    /// One-line console report
    pub fn report_line(&self) -> String {
        match self {
            JobOutcome::Processed { input, output } => {
                format!("✓ Processed: {} -> {}", base_name(input), base_name(output))
            }
            JobOutcome::Missing { input } => format!("✗ File not found: {}", input.display()),
            JobOutcome::Failed { input, error } => {
                format!("✗ Error processing {}: {}", input.display(), error)
            }
        }
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<JobOutcome>,
}

impl BatchReport {
    pub fn processed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn missing(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, JobOutcome::Missing { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, JobOutcome::Failed { .. }))
            .count()
    }

    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(JobOutcome::is_success)
    }
}

/// Process every job in order
///
/// A missing input or a failed load/write is recorded and the next job runs.
pub fn run_batch<S, O>(jobs: &[Job], threshold: i32, source: &mut S, sink: &mut O) -> BatchReport
where
    S: ImageSource,
    O: OutputSink,
{
    let classifier = LuminanceThreshold::new(threshold);
    let mut report = BatchReport::default();

    tracing::info!("Processing {} images at threshold {}", jobs.len(), threshold);

    for job in jobs {
        let _span = tracing::debug_span!("job", input = %job.input.display()).entered();

        if !job.input.exists() {
            tracing::warn!("Skipping missing input {}", job.input.display());
            report.outcomes.push(JobOutcome::Missing {
                input: job.input.clone(),
            });
            continue;
        }

        let outcome = match process(job, &classifier, source, sink) {
            Ok(()) => JobOutcome::Processed {
                input: job.input.clone(),
                output: job.output.clone(),
            },
            Err(error) => {
                tracing::error!("{}", error);
                JobOutcome::Failed {
                    input: job.input.clone(),
                    error,
                }
            }
        };
        report.outcomes.push(outcome);
    }

    tracing::info!(
        "Done: {} processed, {} missing, {} failed",
        report.processed(),
        report.missing(),
        report.failed()
    );

    report
}

fn process<S, O>(
    job: &Job,
    classifier: &LuminanceThreshold,
    source: &mut S,
    sink: &mut O,
) -> Result<(), JobError>
where
    S: ImageSource,
    O: OutputSink,
{
    let image = source.load(&job.input)?;
    let result = segmentation::remove_background(&image, classifier);
    sink.write(&result, &job.output)
}
