// Module declarations in dependency order
pub mod commands;
pub mod core;
pub mod processing;
pub mod utils;

// Public exports for external consumers
pub use crate::core::{
    EncodeSettings, JobOutcome, Manifest, Preset, ResizeSpec, TransformJob, TransformSettings,
};
pub use processing::{TransformExecutor, TransformedImage, target_dimensions, transform_bytes};
pub use utils::{OutputFormat, TransformError, TransformResult};
pub use commands::*;
