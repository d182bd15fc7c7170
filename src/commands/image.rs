//! Command handlers for image transforms.

use std::io::Write;
use tracing::debug;
use crate::commands::args::{Command, USAGE};
use crate::core::{JobOutcome, Preset, TransformJob};
use crate::processing::TransformExecutor;
use crate::utils::{TransformError, TransformResult};

/// Transforms a single image.
///
/// Convenience wrapper around [`transform_images`] for one-off jobs. Unlike
/// the batch form, a failed job is returned as an error.
pub async fn transform_image<W: Write>(out: W, job: TransformJob) -> TransformResult<JobOutcome> {
    let outcome = transform_images(out, vec![job])
        .await
        .into_iter()
        .next()
        .ok_or_else(|| TransformError::task("No result returned"))?;

    if outcome.success {
        Ok(outcome)
    } else {
        Err(TransformError::task(outcome.error.unwrap_or_default()))
    }
}

/// Transforms all `jobs` in order, printing one line per job to `out`.
///
/// Returns one outcome per job; individual failures never abort the batch.
pub async fn transform_images<W: Write>(out: W, jobs: Vec<TransformJob>) -> Vec<JobOutcome> {
    debug!("Received transform command for {} images", jobs.len());
    let mut executor = TransformExecutor::new(out);
    executor.execute_batch(&jobs).await
}

/// Runs a parsed command line.
///
/// Only a manifest that cannot be loaded fails the whole run.
pub async fn run_command<W: Write>(mut out: W, command: Command) -> TransformResult<Vec<JobOutcome>> {
    match command {
        Command::Help => {
            writeln!(out, "{USAGE}")?;
            Ok(Vec::new())
        }
        Command::ListPresets => {
            for preset in Preset::ALL {
                writeln!(out, "{}", preset)?;
            }
            Ok(Vec::new())
        }
        command => {
            let jobs = command.into_jobs().await?;
            Ok(transform_images(out, jobs).await)
        }
    }
}
