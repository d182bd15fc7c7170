//! Core types for transform settings and results.

use serde::Deserialize;
use std::path::PathBuf;
use crate::utils::OutputFormat;

/// How the output dimensions are derived from the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ResizeSpec {
    /// Keep the source dimensions
    #[default]
    None,
    /// Fixed width, height follows the source aspect ratio
    Width { width: u32 },
    /// Fixed width and height, aspect ratio is not preserved
    Exact { width: u32, height: u32 },
}

/// Encoder knobs shared by all output formats.
///
/// Formats ignore the knobs they have no use for: PNG ignores `quality`,
/// JPEG and WebP ignore `optimize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct EncodeSettings {
    /// Quality 1-100, format default when unset
    #[serde(default)]
    pub quality: Option<u8>,
    /// Spend more effort for a smaller file
    #[serde(default)]
    pub optimize: bool,
}

/// Everything needed to turn one source image into one output image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct TransformSettings {
    #[serde(default)]
    pub resize: ResizeSpec,
    /// Output format; inferred from the output path when unset
    #[serde(default)]
    pub format: Option<OutputFormat>,
    #[serde(flatten)]
    pub encode: EncodeSettings,
}

/// Result of a single job.
///
/// One outcome is produced per job, successful or not.
#[derive(Debug, Clone)]
pub struct JobOutcome {
    /// Path of the source image
    pub source_path: PathBuf,
    /// Path that was (or would have been) written
    pub output_path: Option<PathBuf>,
    /// Dimensions of the written image
    pub dimensions: Option<(u32, u32)>,
    /// Size of the written file in bytes
    pub output_size: u64,
    /// Whether the job succeeded
    pub success: bool,
    /// Error message if the job failed
    pub error: Option<String>,
}

impl JobOutcome {
    pub fn succeeded(source_path: PathBuf, output_path: PathBuf, dimensions: (u32, u32), output_size: u64) -> Self {
        Self {
            source_path,
            output_path: Some(output_path),
            dimensions: Some(dimensions),
            output_size,
            success: true,
            error: None,
        }
    }

    pub fn failed(source_path: PathBuf, output_path: Option<PathBuf>, error: impl Into<String>) -> Self {
        Self {
            source_path,
            output_path,
            dimensions: None,
            output_size: 0,
            success: false,
            error: Some(error.into()),
        }
    }
}
