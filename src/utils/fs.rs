use std::path::{Path, PathBuf};
use crate::utils::{OutputFormat, TransformError, TransformResult};

/// File name component of `path` for log and diagnostic lines.
pub fn extract_filename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Get file extension as lowercase string
pub fn get_extension(path: impl AsRef<Path>) -> TransformResult<String> {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| TransformError::format(
            format!("File has no extension: {}", path.as_ref().display())
        ))
}

/// Returns `path` with its extension replaced by the primary extension of
/// `format`, unless it already carries one of that format's extensions.
pub fn with_format_extension(path: &Path, format: OutputFormat) -> PathBuf {
    match get_extension(path) {
        Ok(ext) if format.matches_extension(&ext) => path.to_path_buf(),
        _ => path.with_extension(format.primary_extension()),
    }
}
