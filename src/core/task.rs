//! Transform job definition and output path resolution.

use serde::Deserialize;
use std::path::PathBuf;
use crate::core::TransformSettings;
use crate::utils::{OutputFormat, TransformResult, resolve_output_format, with_format_extension};

/// A single source-to-output image transform, declared ahead of the run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransformJob {
    /// Path to the source image file
    #[serde(rename = "input")]
    pub input_path: PathBuf,
    /// Where the result is written; derived from the input when unset
    #[serde(rename = "output", default)]
    pub output_path: Option<PathBuf>,
    /// Resize, format and encoder settings
    #[serde(flatten)]
    pub settings: TransformSettings,
}

impl TransformJob {
    pub fn new(input_path: impl Into<PathBuf>, output_path: Option<PathBuf>, settings: TransformSettings) -> Self {
        Self {
            input_path: input_path.into(),
            output_path,
            settings,
        }
    }

    /// Path the result will be written to.
    ///
    /// Without an explicit output path the source is overwritten in place,
    /// unless a different output format is requested, in which case the
    /// source path gets that format's extension.
    pub fn resolved_output_path(&self) -> PathBuf {
        match (&self.output_path, self.settings.format) {
            (Some(path), _) => path.clone(),
            (None, Some(format)) => with_format_extension(&self.input_path, format),
            (None, None) => self.input_path.clone(),
        }
    }

    /// Format the result will be encoded in.
    pub fn resolved_format(&self) -> TransformResult<OutputFormat> {
        resolve_output_format(self.settings.format, self.resolved_output_path())
    }
}
