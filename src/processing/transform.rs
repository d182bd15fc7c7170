//! The decode → resize → encode pipeline.
//!
//! [`transform_bytes`] is pure and works entirely in memory;
//! [`transform_file`] wraps it with validation and file IO for one job.

use std::path::Path;
use tracing::debug;
use crate::core::{JobOutcome, TransformJob, TransformSettings};
use crate::utils::{OutputFormat, TransformError, TransformResult, extract_filename, validate_job};

use super::encode::encode_image;
use super::resize::apply_resize;

/// Encoded output of a transform together with its dimensions.
#[derive(Debug, Clone)]
pub struct TransformedImage {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Decodes `source`, resizes it per `settings` and encodes it as `format`.
///
/// The source format is sniffed from the bytes, not from any file name.
pub fn transform_bytes(
    source: &[u8],
    format: OutputFormat,
    settings: &TransformSettings,
) -> TransformResult<TransformedImage> {
    let image = image::load_from_memory(source)
        .map_err(|e| TransformError::decode(format!("Failed to decode image: {e}")))?;

    debug!("Decoded {}×{} image", image.width(), image.height());

    let image = apply_resize(image, &settings.resize)?;
    let (width, height) = (image.width(), image.height());
    let bytes = encode_image(&image, format, &settings.encode)?;

    Ok(TransformedImage { bytes, width, height })
}

/// Runs one job synchronously: validate, read, transform, write.
///
/// Nothing is written unless the whole pipeline succeeds.
pub fn transform_file(job: &TransformJob) -> TransformResult<JobOutcome> {
    validate_job(job)?;

    let input_path = &job.input_path;
    let output_path = job.resolved_output_path();
    let format = job.resolved_format()?;

    let source = std::fs::read(input_path).map_err(|e| {
        TransformError::io(format!("Cannot read '{}': {e}", input_path.display()))
    })?;

    let transformed = transform_bytes(&source, format, &job.settings)?;
    drop(source);

    write_output(&output_path, &transformed.bytes)?;

    debug!(
        "'{}' → '{}' ({} bytes)",
        extract_filename(input_path),
        extract_filename(&output_path),
        transformed.bytes.len()
    );

    Ok(JobOutcome::succeeded(
        input_path.clone(),
        output_path,
        (transformed.width, transformed.height),
        transformed.bytes.len() as u64,
    ))
}

fn write_output(path: &Path, bytes: &[u8]) -> TransformResult<()> {
    std::fs::write(path, bytes)
        .map_err(|e| TransformError::io(format!("Cannot write '{}': {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ResizeSpec;
    use image::{DynamicImage, GenericImageView, ImageBuffer, ImageFormat, Rgb};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let buffer = ImageBuffer::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 90]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(buffer)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn width_only_resize_in_memory() {
        let settings = TransformSettings {
            resize: ResizeSpec::Width { width: 80 },
            ..TransformSettings::default()
        };
        let out = transform_bytes(&png_bytes(160, 120), OutputFormat::PNG, &settings).unwrap();
        assert_eq!((out.width, out.height), (80, 60));
        assert_eq!(image::load_from_memory(&out.bytes).unwrap().dimensions(), (80, 60));
    }

    #[test]
    fn converts_without_resizing() {
        let out = transform_bytes(&png_bytes(33, 17), OutputFormat::WebP, &TransformSettings::default()).unwrap();
        assert_eq!(image::guess_format(&out.bytes).unwrap(), ImageFormat::WebP);
        assert_eq!((out.width, out.height), (33, 17));
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = transform_bytes(b"not an image", OutputFormat::PNG, &TransformSettings::default()).unwrap_err();
        assert!(matches!(err, TransformError::Decode(_)));
    }

    #[test]
    fn corrupt_source_leaves_target_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.png");
        let output = dir.path().join("broken.webp");
        std::fs::write(&input, b"\x89PNG\r\n\x1a\ntruncated").unwrap();

        let job = TransformJob::new(&input, None, TransformSettings {
            format: Some(OutputFormat::WebP),
            ..TransformSettings::default()
        });
        assert!(transform_file(&job).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn failed_write_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("ok.png");
        std::fs::write(&input, png_bytes(8, 8)).unwrap();
        let output = dir.path().join(format!("{}.png", "n".repeat(300)));

        let job = TransformJob::new(&input, Some(output), TransformSettings::default());
        let err = transform_file(&job).unwrap_err();
        assert!(matches!(err, TransformError::IO(ref msg) if msg.starts_with("Cannot write")));
    }

    #[test]
    fn oversized_target_is_a_resize_error() {
        let settings = TransformSettings {
            resize: ResizeSpec::Exact { width: 1_000_000, height: 1_000_000 },
            ..TransformSettings::default()
        };
        let err = transform_bytes(&png_bytes(4, 4), OutputFormat::PNG, &settings).unwrap_err();
        assert!(matches!(err, TransformError::Resize(_)));
    }
}
