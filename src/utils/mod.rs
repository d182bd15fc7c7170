pub mod error;
pub mod validation;
pub mod formats;
pub mod fs;

pub use error::{PathError, TransformError, TransformResult, ValidationError};
pub use validation::{validate_job, validate_input_path, validate_output_path, validate_settings};
pub use formats::{OutputFormat, format_from_extension, resolve_output_format};
pub use fs::{extract_filename, get_extension, with_format_extension};
