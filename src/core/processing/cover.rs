use image::RgbImage;
use tracing::debug;

use crate::core::processing::resize::resize_rgb_region;
use crate::error::Result;
use crate::types::ResamplingFilter;

/// Centered source-space crop window with the target's aspect ratio.
///
/// Returns (left, top, width, height) in fractional source pixels. Resizing
/// this window to the target size is equivalent to scale-to-fill followed by
/// a centered crop, but needs no scaled intermediate: the working set stays
/// bounded by the source and the target, even for sliver inputs like 10000x1
/// where the scaled image would not fit in memory.
pub fn cover_window(
    cols: u32,
    rows: u32,
    target_cols: u32,
    target_rows: u32,
) -> (f64, f64, f64, f64) {
    let src_aspect = cols as f64 / rows as f64;
    let target_aspect = target_cols as f64 / target_rows as f64;
    // min() guards float error when the aspects already match; max() keeps
    // the window at least one source pixel wide for degenerate slivers.
    let (window_cols, window_rows) = if src_aspect > target_aspect {
        (
            (rows as f64 * target_aspect).min(cols as f64).max(1.0),
            rows as f64,
        )
    } else {
        (
            cols as f64,
            (cols as f64 / target_aspect).min(rows as f64).max(1.0),
        )
    };
    let left = (cols as f64 - window_cols) / 2.0;
    let top = (rows as f64 - window_rows) / 2.0;
    (left, top, window_cols, window_rows)
}

/// Scale the source uniformly so it fully covers the target rectangle, then
/// center-crop to exactly (target_cols, target_rows). Implemented as one
/// bounded resize of the centered source window. An image already at the
/// target size is returned untouched.
pub fn cover_crop(
    img: &RgbImage,
    target_cols: u32,
    target_rows: u32,
    filter: ResamplingFilter,
) -> Result<RgbImage> {
    let (cols, rows) = img.dimensions();
    if cols == target_cols && rows == target_rows {
        return Ok(img.clone());
    }

    let (left, top, window_cols, window_rows) =
        cover_window(cols, rows, target_cols, target_rows);
    debug!(
        "Cover/crop: {}x{} -> window {:.1}x{:.1} at ({:.1}, {:.1}) -> {}x{}",
        cols, rows, window_cols, window_rows, left, top, target_cols, target_rows
    );

    resize_rgb_region(
        img,
        (left, top, window_cols, window_rows),
        target_cols,
        target_rows,
        filter,
    )
}
