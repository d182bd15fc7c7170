//! JSON job manifests.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use crate::core::TransformJob;
use crate::utils::{TransformError, TransformResult};

/// A job list read from disk.
///
/// Relative paths inside the manifest are resolved against the manifest's
/// own directory.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub jobs: Vec<TransformJob>,
}

impl Manifest {
    pub fn from_json(json: &str) -> TransformResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| TransformError::manifest(format!("Invalid manifest: {}", e)))
    }

    pub async fn load(path: impl AsRef<Path>) -> TransformResult<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await.map_err(|e| {
            TransformError::manifest(format!("Cannot read {}: {}", path.display(), e))
        })?;

        let mut manifest = Self::from_json(&json)?;
        if let Some(base) = path.parent() {
            manifest.rebase(base);
        }
        debug!("Loaded {} jobs from {}", manifest.jobs.len(), path.display());
        Ok(manifest)
    }

    fn rebase(&mut self, base: &Path) {
        let join = |p: &PathBuf| if p.is_relative() { base.join(p) } else { p.clone() };
        for job in &mut self.jobs {
            job.input_path = join(&job.input_path);
            job.output_path = job.output_path.as_ref().map(join);
        }
    }

    pub fn into_jobs(self) -> Vec<TransformJob> {
        self.jobs
    }
}
