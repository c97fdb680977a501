use fast_image_resize::{PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbImage;

use crate::error::{Error, Result};
use crate::types::ResamplingFilter;

/// Resize an RGB image to exactly (target_cols, target_rows) using the given
/// interpolation kernel. Aspect ratio is the caller's concern.
pub fn resize_rgb(
    src: &RgbImage,
    target_cols: u32,
    target_rows: u32,
    filter: ResamplingFilter,
) -> Result<RgbImage> {
    if src.width() == target_cols && src.height() == target_rows {
        return Ok(src.clone());
    }
    let window = (0.0, 0.0, src.width() as f64, src.height() as f64);
    resize_rgb_region(src, window, target_cols, target_rows, filter)
}

/// Resize a source-space window (left, top, width, height) of an RGB image
/// directly to (target_cols, target_rows). The window may have fractional
/// coordinates and must lie within the source bounds. No intermediate larger
/// than the destination is materialized.
pub fn resize_rgb_region(
    src: &RgbImage,
    window: (f64, f64, f64, f64),
    target_cols: u32,
    target_rows: u32,
    filter: ResamplingFilter,
) -> Result<RgbImage> {
    let (left, top, window_cols, window_rows) = window;
    let resize_options = ResizeOptions::new()
        .resize_alg(ResizeAlg::Convolution(filter.filter_type()))
        .crop(left, top, window_cols, window_rows);
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        src.width(),
        src.height(),
        src.as_raw().clone(),
        PixelType::U8x3,
    )
    .map_err(|e| Error::Resize(e.to_string()))?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x3);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(|e| Error::Resize(e.to_string()))?;

    RgbImage::from_raw(target_cols, target_rows, dst_image.into_vec())
        .ok_or_else(|| Error::Resize("resized buffer has unexpected length".to_string()))
}
