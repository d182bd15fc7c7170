//! Sequential batch executor.
//!
//! Each job runs inside a `tokio::task::spawn_blocking` call so decoding and
//! resampling never block the async runtime. Jobs are awaited one at a time,
//! in declaration order; a failing job is reported and the batch moves on.

use std::io::{self, Write};
use tracing::{debug, info, warn};

use crate::core::{JobOutcome, TransformJob};
use crate::utils::{TransformError, TransformResult};

use super::transform::transform_file;

/// Synchronous body of one job, run on the blocking pool.
type JobFn = fn(&TransformJob) -> TransformResult<JobOutcome>;

/// Runs transform jobs and prints one diagnostic line per job to `out`.
pub struct TransformExecutor<W: Write> {
    out: W,
}

impl TransformExecutor<io::Stdout> {
    /// Executor printing its diagnostics to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TransformExecutor<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Processes all `jobs` sequentially and returns one outcome per job.
    ///
    /// Never fails: every error is caught at the job boundary.
    pub async fn execute_batch(&mut self, jobs: &[TransformJob]) -> Vec<JobOutcome> {
        self.execute_with(jobs, transform_file).await
    }

    async fn execute_with(&mut self, jobs: &[TransformJob], transform: JobFn) -> Vec<JobOutcome> {
        let total = jobs.len();
        info!("Processing {} jobs", total);

        let mut outcomes = Vec::with_capacity(total);
        for (idx, job) in jobs.iter().enumerate() {
            debug!("[{}/{}] {}", idx + 1, total, job.input_path.display());

            let outcome = match run_job(job.clone(), transform).await {
                Ok(outcome) => {
                    self.report_success(&outcome);
                    outcome
                }
                Err(e) => {
                    let error_msg = e.to_string();
                    warn!("Transform failed for {}: {}", job.input_path.display(), error_msg);
                    self.report_failure(job, &error_msg);
                    JobOutcome::failed(job.input_path.clone(), Some(job.resolved_output_path()), error_msg)
                }
            };
            outcomes.push(outcome);
        }

        info!("Finished {} jobs", total);
        outcomes
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    // ── Diagnostics ──────────────────────────────────────────────────────────────

    fn report_success(&mut self, outcome: &JobOutcome) {
        let output = outcome
            .output_path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let (width, height) = outcome.dimensions.unwrap_or_default();

        let line = format!(
            "Saved {} -> {} ({}x{})",
            outcome.source_path.display(),
            output,
            width,
            height
        );
        self.emit(&line);
    }

    fn report_failure(&mut self, job: &TransformJob, error: &str) {
        let line = format!("Error processing {}: {}", job.input_path.display(), error);
        self.emit(&line);
    }

    fn emit(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{line}") {
            warn!("Failed to write diagnostic '{}': {}", line, e);
        }
    }
}

/// Runs a single job on tokio's blocking thread pool.
///
/// A panic inside the job surfaces as [`TransformError::Task`].
async fn run_job(job: TransformJob, transform: JobFn) -> TransformResult<JobOutcome> {
    tokio::task::spawn_blocking(move || transform(&job))
        .await
        .map_err(|e| TransformError::task(format!("Task panicked: {e}")))?
}
