//! Command-line parsing.

use std::ffi::OsString;
use std::path::PathBuf;
use crate::core::{EncodeSettings, Manifest, Preset, ResizeSpec, TransformJob, TransformSettings};
use crate::utils::{OutputFormat, TransformError, TransformResult};

pub const USAGE: &str = "\
Usage:
  image-transformer --manifest <jobs.json>
  image-transformer --preset <name> [--output <path>] <file>...
  image-transformer [--width <n> | --size <w>x<h>] [--format <png|jpeg|webp>]
                    [--quality <1-100>] [--optimize] [--output <path>] <file>...
  image-transformer --list-presets

Set RUST_LOG (e.g. RUST_LOG=debug) for more detailed logs on stderr.";

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    ListPresets,
    Manifest(PathBuf),
    Jobs(Vec<TransformJob>),
}

impl Command {
    /// Resolves the command into the job list to run.
    ///
    /// `Help` and `ListPresets` run no jobs.
    pub async fn into_jobs(self) -> TransformResult<Vec<TransformJob>> {
        match self {
            Self::Manifest(path) => Ok(Manifest::load(path).await?.into_jobs()),
            Self::Jobs(jobs) => Ok(jobs),
            Self::Help | Self::ListPresets => Ok(Vec::new()),
        }
    }
}

fn usage_error(err: pico_args::Error) -> TransformError {
    TransformError::cli(err.to_string())
}

/// Parses `<w>x<h>`.
pub fn parse_size(s: &str) -> TransformResult<(u32, u32)> {
    let invalid = || TransformError::cli(format!("Invalid size '{}', expected <width>x<height>", s));
    let (w, h) = s.split_once(['x', 'X']).ok_or_else(invalid)?;
    let w = w.trim().parse().map_err(|_| invalid())?;
    let h = h.trim().parse().map_err(|_| invalid())?;
    Ok((w, h))
}

pub fn parse_args(mut args: pico_args::Arguments) -> TransformResult<Command> {
    if args.contains(["-h", "--help"]) {
        return Ok(Command::Help);
    }
    if args.contains("--list-presets") {
        return Ok(Command::ListPresets);
    }

    let manifest: Option<PathBuf> = args.opt_value_from_os_str("--manifest", |s| {
        Ok::<_, TransformError>(PathBuf::from(s))
    }).map_err(usage_error)?;
    let preset: Option<Preset> = args.opt_value_from_str("--preset").map_err(usage_error)?;
    let width: Option<u32> = args.opt_value_from_str("--width").map_err(usage_error)?;
    let size: Option<(u32, u32)> = args.opt_value_from_fn("--size", parse_size).map_err(usage_error)?;
    let format: Option<OutputFormat> = args.opt_value_from_str("--format").map_err(usage_error)?;
    let quality: Option<u8> = args.opt_value_from_str("--quality").map_err(usage_error)?;
    let optimize = args.contains("--optimize");
    let output: Option<PathBuf> = args.opt_value_from_os_str("--output", |s| {
        Ok::<_, TransformError>(PathBuf::from(s))
    }).map_err(usage_error)?;

    let sources = collect_sources(args.finish())?;
    let has_transform_flags = width.is_some() || size.is_some() || format.is_some() || quality.is_some() || optimize;

    if let Some(path) = manifest {
        if preset.is_some() || has_transform_flags || output.is_some() || !sources.is_empty() {
            return Err(TransformError::cli("--manifest cannot be combined with other options or files"));
        }
        return Ok(Command::Manifest(path));
    }

    if sources.is_empty() {
        return Err(TransformError::cli("No input files given"));
    }

    if let Some(preset) = preset {
        if has_transform_flags {
            return Err(TransformError::cli(format!(
                "--preset {} cannot be combined with transform options", preset
            )));
        }
        return preset.jobs(sources, output).map(Command::Jobs);
    }

    let resize = match (width, size) {
        (Some(_), Some(_)) => return Err(TransformError::cli("--width and --size are mutually exclusive")),
        (Some(width), None) => ResizeSpec::Width { width },
        (None, Some((width, height))) => ResizeSpec::Exact { width, height },
        (None, None) => ResizeSpec::None,
    };

    if output.is_some() && sources.len() != 1 {
        return Err(TransformError::cli(format!(
            "--output needs exactly one source, got {}", sources.len()
        )));
    }

    let settings = TransformSettings {
        resize,
        format,
        encode: EncodeSettings { quality, optimize },
    };

    Ok(Command::Jobs(
        sources
            .into_iter()
            .map(|source| TransformJob::new(source, output.clone(), settings))
            .collect(),
    ))
}

fn collect_sources(free: Vec<OsString>) -> TransformResult<Vec<PathBuf>> {
    free.into_iter()
        .map(|arg| {
            if arg.to_string_lossy().starts_with("--") {
                Err(TransformError::cli(format!("Unknown option: {}", arg.to_string_lossy())))
            } else {
                Ok(PathBuf::from(arg))
            }
        })
        .collect()
}
