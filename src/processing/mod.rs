//! Image processing via the `image` crate.
//!
//! - [`TransformExecutor`]: Drives a batch of jobs and prints per-job diagnostics.
//! - [`transform`]: The in-memory decode → resize → encode pipeline.
//! - [`resize`]: Maps `ResizeSpec` to output dimensions and Lanczos resampling.
//! - [`encode`]: Maps `EncodeSettings` to format-specific encoders.

pub mod encode;
pub mod executor;
pub mod resize;
pub mod transform;

pub use executor::TransformExecutor;
pub use resize::target_dimensions;
pub use transform::{TransformedImage, transform_bytes, transform_file};
