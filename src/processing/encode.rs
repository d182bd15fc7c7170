//! Maps [`EncodeSettings`] to format-specific encoder options.
//!
//! Quality 100 means lossless for WebP, matching the convention used for the
//! other lossy formats. PNG is always lossless and only honours `optimize`.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::codecs::webp::WebPEncoder;
use image::DynamicImage;
use webp_animation::{Encoder, EncoderOptions, EncodingConfig, EncodingType, LossyEncodingConfig};
use crate::core::EncodeSettings;
use crate::utils::{OutputFormat, TransformError};

type Result<T> = std::result::Result<T, TransformError>;

const WEBP_METHOD: usize = 4; // 0=fast .. 6=slower-better, libwebp default

/// Returns the effective quality for `format`, falling back to its default.
fn effective_quality(settings: &EncodeSettings, format: OutputFormat) -> u8 {
    settings.quality.unwrap_or_else(|| format.default_quality()).clamp(1, 100)
}

/// Encodes `image` as PNG.
///
/// `optimize` trades encoding time for the best deflate compression.
pub fn encode_png(image: &DynamicImage, settings: &EncodeSettings) -> Result<Vec<u8>> {
    let compression = if settings.optimize {
        CompressionType::Best
    } else {
        CompressionType::Default
    };

    let mut buf = Vec::new();
    let encoder = PngEncoder::new_with_quality(&mut buf, compression, PngFilter::Adaptive);
    image
        .write_with_encoder(encoder)
        .map_err(|e| TransformError::encode(format!("PNG save failed: {e}")))?;
    Ok(buf)
}

/// Encodes `image` as baseline JPEG. Alpha is discarded.
///
/// `optimize` has no effect: `JpegEncoder` always writes the standard
/// Huffman tables.
pub fn encode_jpeg(image: &DynamicImage, settings: &EncodeSettings) -> Result<Vec<u8>> {
    let q = effective_quality(settings, OutputFormat::JPEG);
    let rgb = DynamicImage::ImageRgb8(image.to_rgb8());

    let mut buf = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buf, q);
    rgb.write_with_encoder(encoder)
        .map_err(|e| TransformError::encode(format!("JPEG save failed: {e}")))?;
    Ok(buf)
}

/// Encodes `image` as WebP.
///
/// When quality == 100: lossless mode.
/// Otherwise: lossy through libwebp.
pub fn encode_webp(image: &DynamicImage, settings: &EncodeSettings) -> Result<Vec<u8>> {
    let q = effective_quality(settings, OutputFormat::WebP);
    let rgba = image.to_rgba8();

    if q == 100 {
        let mut buf = Vec::new();
        DynamicImage::ImageRgba8(rgba)
            .write_with_encoder(WebPEncoder::new_lossless(&mut buf))
            .map_err(|e| TransformError::encode(format!("WebP save failed: {e}")))?;
        return Ok(buf);
    }

    let options = EncoderOptions {
        encoding_config: Some(EncodingConfig {
            encoding_type: EncodingType::Lossy(LossyEncodingConfig::default()),
            quality: f32::from(q),
            method: WEBP_METHOD,
        }),
        ..EncoderOptions::default()
    };

    // A single-frame animation is assembled into a still image by libwebp.
    let mut encoder = Encoder::new_with_options(rgba.dimensions(), options)
        .map_err(|e| TransformError::encode(format!("WebP encoder setup failed: {e:?}")))?;
    encoder
        .add_frame(rgba.as_raw(), 0)
        .map_err(|e| TransformError::encode(format!("WebP save failed: {e:?}")))?;
    let data = encoder
        .finalize(100)
        .map_err(|e| TransformError::encode(format!("WebP save failed: {e:?}")))?;

    Ok(data.to_vec())
}

/// Dispatches to the correct encoder based on `format`.
pub fn encode_image(image: &DynamicImage, format: OutputFormat, settings: &EncodeSettings) -> Result<Vec<u8>> {
    match format {
        OutputFormat::PNG => encode_png(image, settings),
        OutputFormat::JPEG => encode_jpeg(image, settings),
        OutputFormat::WebP => encode_webp(image, settings),
    }
}
