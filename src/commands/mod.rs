//! Command handlers for the command-line front end.
//!
//! - [`parse_args`]: Turn process arguments into a [`Command`]
//! - [`run_command`]: Execute a command, printing per-job diagnostics
//! - [`transform_image`] / [`transform_images`]: Library entry points

mod args;
mod image;

pub use args::{Command, USAGE, parse_args, parse_size};
pub use self::image::*;
