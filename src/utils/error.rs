//! Error types for the image transformer.
//!
//! Every variant of [`TransformError`] is a processing failure as far as the
//! batch runner is concerned: it is reported against the job that raised it
//! and the batch moves on.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Validation errors for jobs and their settings.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Path-related validation error
    #[error("Path error: {0}")]
    Path(#[from] PathError),
    /// Invalid settings error
    #[error("Settings error: {0}")]
    Settings(String),
}

/// File path errors.
#[derive(Error, Debug)]
pub enum PathError {
    /// File does not exist
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    /// Path exists but is not a file
    #[error("Not a file: {0}")]
    NotFile(PathBuf),
    /// Target directory is missing
    #[error("Output directory does not exist: {0}")]
    MissingDirectory(PathBuf),
}

/// Main error type for the transformer.
#[derive(Error, Debug)]
pub enum TransformError {
    /// Job or settings validation failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// File IO error
    #[error("IO error: {0}")]
    IO(String),

    /// Source bytes could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Resampling to the target size is not possible
    #[error("Resize error: {0}")]
    Resize(String),

    /// Image could not be encoded in the requested format
    #[error("Encode error: {0}")]
    Encode(String),

    /// Unsupported or unknown image format
    #[error("Format error: {0}")]
    Format(String),

    /// Job manifest could not be read or parsed
    #[error("Manifest error: {0}")]
    Manifest(String),

    /// Invalid command-line usage
    #[error("Usage error: {0}")]
    Cli(String),

    /// The blocking task running a job did not complete
    #[error("Task error: {0}")]
    Task(String),
}

/// Convenience result type for transformer operations.
pub type TransformResult<T> = Result<T, TransformError>;

// Helper methods for error creation
impl TransformError {
    pub fn io<T: Into<String>>(msg: T) -> Self {
        Self::IO(msg.into())
    }

    pub fn decode<T: Into<String>>(msg: T) -> Self {
        Self::Decode(msg.into())
    }

    pub fn resize<T: Into<String>>(msg: T) -> Self {
        Self::Resize(msg.into())
    }

    pub fn encode<T: Into<String>>(msg: T) -> Self {
        Self::Encode(msg.into())
    }

    pub fn format<T: Into<String>>(msg: T) -> Self {
        Self::Format(msg.into())
    }

    pub fn manifest<T: Into<String>>(msg: T) -> Self {
        Self::Manifest(msg.into())
    }

    pub fn cli<T: Into<String>>(msg: T) -> Self {
        Self::Cli(msg.into())
    }

    pub fn task<T: Into<String>>(msg: T) -> Self {
        Self::Task(msg.into())
    }
}

// Helper methods for validation error creation
impl ValidationError {
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotFound(path.into()))
    }

    pub fn not_a_file(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotFile(path.into()))
    }

    pub fn missing_directory(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::MissingDirectory(path.into()))
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}

// Convert std::io::Error to TransformError
impl From<io::Error> for TransformError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}

// Convert PathError to TransformError
impl From<PathError> for TransformError {
    fn from(err: PathError) -> Self {
        Self::Validation(ValidationError::Path(err))
    }
}
