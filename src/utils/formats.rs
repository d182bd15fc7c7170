use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use crate::utils::TransformError;

/// Formats the transformer can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[serde(alias = "jpg")]
    JPEG,
    PNG,
    WebP,
}

impl OutputFormat {
    /// Get the default quality value for this format
    pub fn default_quality(&self) -> u8 {
        match self {
            Self::JPEG => 85,
            Self::PNG => 100,  // PNG is always lossless
            Self::WebP => 80,
        }
    }

    /// Get file extensions associated with this format
    pub fn extensions(&self) -> &[&str] {
        match self {
            Self::JPEG => &["jpg", "jpeg"],
            Self::PNG => &["png"],
            Self::WebP => &["webp"],
        }
    }

    /// Check if the extension matches this format
    pub fn matches_extension(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        self.extensions().contains(&ext.as_str())
    }

    /// Get the primary extension for this format
    pub fn primary_extension(&self) -> &str {
        self.extensions()[0]
    }
}

impl FromStr for OutputFormat {
    type Err = TransformError;

    fn from_str(ext: &str) -> Result<Self, Self::Err> {
        let ext = ext.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Ok(Self::JPEG),
            "png" => Ok(Self::PNG),
            "webp" => Ok(Self::WebP),
            _ => Err(TransformError::format(format!(
                "Unsupported image format: {}", ext
            ))),
        }
    }
}

/// Get format from file extension
pub fn format_from_extension(path: impl AsRef<Path>) -> Result<OutputFormat, TransformError> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| TransformError::format(
            format!("File has no extension: {}", path.display())
        ))?;

    OutputFormat::from_str(ext)
}

/// Resolves the format to write: the requested one, or the one implied by
/// the output path.
pub fn resolve_output_format(
    requested: Option<OutputFormat>,
    output_path: impl AsRef<Path>,
) -> Result<OutputFormat, TransformError> {
    match requested {
        Some(format) => Ok(format),
        None => format_from_extension(output_path),
    }
}
