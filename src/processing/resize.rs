//! Resize logic mapping [`ResizeSpec`] to `image` resampling.

use image::DynamicImage;
use image::imageops::FilterType;
use tracing::debug;
use crate::core::ResizeSpec;
use crate::utils::{TransformError, TransformResult};

/// Filter used for every resize.
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// Output dimensions for a source of `width`×`height` under `spec`.
///
/// Width-only resizes derive the height as
/// `round(height * target_width / width)`, never less than one pixel.
pub fn target_dimensions(width: u32, height: u32, spec: &ResizeSpec) -> (u32, u32) {
    match *spec {
        ResizeSpec::None => (width, height),
        ResizeSpec::Exact { width, height } => (width, height),
        ResizeSpec::Width { width: target_w } => {
            if width == 0 {
                return (target_w, height);
            }
            let scaled = (f64::from(height) * f64::from(target_w) / f64::from(width)).round();
            (target_w, (scaled as u32).max(1))
        }
    }
}

/// Largest buffer a resize may allocate, shared with the decoder's limit.
fn max_resample_bytes() -> u64 {
    image::Limits::default().max_alloc.unwrap_or(512 * 1024 * 1024)
}

/// Bytes the two Lanczos passes need for a `source_w`-wide image resized to
/// `target_w`×`target_h`. The intermediate buffer holds `Rgba<f32>` pixels.
fn resample_footprint(source_w: u32, target_w: u32, target_h: u32) -> Option<u64> {
    u64::from(source_w.max(target_w))
        .checked_mul(u64::from(target_h))?
        .checked_mul(16)
}

/// Fails when resizing a `source_w`-wide image to `target_w`×`target_h`
/// would allocate more than the decoder's `max_alloc` limit.
pub fn check_resample_size(source_w: u32, target_w: u32, target_h: u32) -> TransformResult<()> {
    let limit = max_resample_bytes();
    match resample_footprint(source_w, target_w, target_h) {
        Some(bytes) if bytes <= limit => Ok(()),
        _ => Err(TransformError::resize(format!(
            "Target size {}x{} exceeds the {} MiB memory limit",
            target_w,
            target_h,
            limit / (1024 * 1024)
        ))),
    }
}

/// Applies `spec` to `image`.
///
/// Returns the image untouched when it already has the target size.
pub fn apply_resize(image: DynamicImage, spec: &ResizeSpec) -> TransformResult<DynamicImage> {
    let (orig_w, orig_h) = (image.width(), image.height());
    let (target_w, target_h) = target_dimensions(orig_w, orig_h, spec);

    if (target_w, target_h) == (orig_w, orig_h) {
        return Ok(image);
    }

    check_resample_size(orig_w, target_w, target_h)?;

    debug!("Resizing {}×{} → {}×{}", orig_w, orig_h, target_w, target_h);
    Ok(image.resize_exact(target_w, target_h, RESAMPLE_FILTER))
}
