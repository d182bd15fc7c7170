//! Built-in transforms for recurring asset chores.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use crate::core::{EncodeSettings, ResizeSpec, TransformJob, TransformSettings};
use crate::utils::{OutputFormat, TransformError};

/// Named transform applied to every source given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Background art re-encoded as lossy WebP for tablets
    WebpGuides,
    /// Background art shrunk in place
    ResizeGuides,
    /// iOS app icon
    AppIcon,
    /// 6.7" iPhone store screenshot
    StoreScreenshot,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::WebpGuides,
        Preset::ResizeGuides,
        Preset::AppIcon,
        Preset::StoreScreenshot,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::WebpGuides => "webp-guides",
            Self::ResizeGuides => "resize-guides",
            Self::AppIcon => "app-icon",
            Self::StoreScreenshot => "store-screenshot",
        }
    }

    pub fn settings(&self) -> TransformSettings {
        match self {
            Self::WebpGuides => TransformSettings {
                resize: ResizeSpec::Width { width: 1080 },
                format: Some(OutputFormat::WebP),
                encode: EncodeSettings { quality: Some(80), optimize: false },
            },
            Self::ResizeGuides => TransformSettings {
                resize: ResizeSpec::Width { width: 800 },
                format: None,
                encode: EncodeSettings { quality: Some(85), optimize: true },
            },
            Self::AppIcon => TransformSettings {
                resize: ResizeSpec::Exact { width: 1024, height: 1024 },
                format: Some(OutputFormat::PNG),
                encode: EncodeSettings::default(),
            },
            Self::StoreScreenshot => TransformSettings {
                resize: ResizeSpec::Exact { width: 1290, height: 2796 },
                format: Some(OutputFormat::PNG),
                encode: EncodeSettings::default(),
            },
        }
    }

    /// One job per source. `output` only applies to a single source.
    pub fn jobs(&self, sources: Vec<PathBuf>, output: Option<PathBuf>) -> Result<Vec<TransformJob>, TransformError> {
        if output.is_some() && sources.len() != 1 {
            return Err(TransformError::cli(format!(
                "--output needs exactly one source, got {}", sources.len()
            )));
        }

        let settings = self.settings();
        Ok(sources
            .into_iter()
            .map(|source| TransformJob::new(source, output.clone(), settings))
            .collect())
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = TransformError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == name)
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(Preset::name).collect();
                TransformError::cli(format!(
                    "Unknown preset '{}' (expected one of: {})", name, known.join(", ")
                ))
            })
    }
}
