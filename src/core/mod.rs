//! Core job types and job sources.
//!
//! This module contains the fundamental types used throughout the crate:
//! - [`TransformJob`]: One source-to-output transform
//! - [`TransformSettings`]: Resize, format and encoder settings for a job
//! - [`JobOutcome`]: Result of running a job
//! - [`Preset`]: Built-in named transforms
//! - [`Manifest`]: Job lists read from JSON

mod types;
mod task;
mod presets;
mod manifest;

pub use types::{EncodeSettings, JobOutcome, ResizeSpec, TransformSettings};
pub use task::TransformJob;
pub use presets::Preset;
pub use manifest::Manifest;
