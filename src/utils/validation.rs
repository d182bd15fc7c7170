use std::path::Path;
use crate::core::{EncodeSettings, ResizeSpec, TransformJob, TransformSettings};
use crate::utils::{TransformResult, ValidationError};

/// Validates a transform job before any file is touched
pub fn validate_job(job: &TransformJob) -> TransformResult<()> {
    validate_settings(&job.settings)?;
    validate_input_path(&job.input_path)?;
    validate_output_path(&job.resolved_output_path())?;
    job.resolved_format()?;
    Ok(())
}

/// Validates the input file path
pub fn validate_input_path(path: &Path) -> TransformResult<()> {
    if !path.exists() {
        return Err(ValidationError::path_not_found(path).into());
    }

    if !path.is_file() {
        return Err(ValidationError::not_a_file(path).into());
    }

    Ok(())
}

/// Validates that the output file's directory exists.
///
/// Missing directories are never created.
pub fn validate_output_path(path: &Path) -> TransformResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(ValidationError::missing_directory(parent).into());
        }
    }

    if path.is_dir() {
        return Err(ValidationError::not_a_file(path).into());
    }

    Ok(())
}

/// Validates resize and encoder settings
pub fn validate_settings(settings: &TransformSettings) -> TransformResult<()> {
    validate_resize(&settings.resize)?;
    validate_encode(&settings.encode)
}

fn validate_resize(resize: &ResizeSpec) -> TransformResult<()> {
    match *resize {
        ResizeSpec::None => Ok(()),
        ResizeSpec::Width { width: 0 } => {
            Err(ValidationError::settings("Width cannot be 0").into())
        }
        ResizeSpec::Exact { width, height } if width == 0 || height == 0 => {
            Err(ValidationError::settings(format!(
                "Target size must be positive, got {}x{}", width, height
            )).into())
        }
        _ => Ok(()),
    }
}

fn validate_encode(encode: &EncodeSettings) -> TransformResult<()> {
    match encode.quality {
        Some(q) if q == 0 || q > 100 => Err(ValidationError::settings(format!(
            "Invalid quality value: {}. Must be between 1 and 100", q
        )).into()),
        _ => Ok(()),
    }
}
