use image::{RgbImage, imageops};
use tracing::debug;

use crate::core::params::NormalizeParams;
use crate::core::processing::cover::cover_crop;
use crate::core::processing::resize::resize_rgb;
use crate::error::Result;

/// Foreground size for the portrait composite: scale to canvas height, and if
/// the resulting width would overflow the canvas (a near-square portrait),
/// cap to canvas width instead and accept a shorter foreground.
pub fn foreground_dimensions(
    cols: u32,
    rows: u32,
    target_cols: u32,
    target_rows: u32,
) -> (u32, u32) {
    let scale = target_rows as f64 / rows as f64;
    let fg_cols = (cols as f64 * scale).round() as u32;
    if fg_cols > target_cols {
        let scale = target_cols as f64 / cols as f64;
        let fg_rows = ((rows as f64 * scale).round() as u32).min(target_rows);
        (target_cols, fg_rows.max(1))
    } else {
        (fg_cols.max(1), target_rows)
    }
}

/// Portrait strategy: blurred duplicate cover/cropped to the canvas as the
/// background, the unblurred source scaled and pasted centered on top.
/// Avoids both destructive cropping of a tall photo and letterbox bars.
pub fn blur_composite(img: &RgbImage, params: &NormalizeParams) -> Result<RgbImage> {
    let (target_cols, target_rows) = (params.canvas_width, params.canvas_height);

    let blurred = if params.blur_sigma > 0.0 {
        imageops::blur(img, params.blur_sigma)
    } else {
        img.clone()
    };
    let mut canvas = cover_crop(&blurred, target_cols, target_rows, params.filter)?;

    let (fg_cols, fg_rows) =
        foreground_dimensions(img.width(), img.height(), target_cols, target_rows);
    let foreground = resize_rgb(img, fg_cols, fg_rows, params.filter)?;

    let x_offset = (target_cols - fg_cols) / 2;
    let y_offset = (target_rows - fg_rows) / 2;
    debug!(
        "Composite: foreground {}x{} at ({}, {}) on {}x{} canvas",
        fg_cols, fg_rows, x_offset, y_offset, target_cols, target_rows
    );
    imageops::overlay(&mut canvas, &foreground, x_offset as i64, y_offset as i64);

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ResamplingFilter;
    use image::Rgb;

    fn params(width: u32, height: u32, sigma: f32) -> NormalizeParams {
        NormalizeParams {
            canvas_width: width,
            canvas_height: height,
            blur_sigma: sigma,
            jpeg_quality: 90,
            filter: ResamplingFilter::Bilinear,
        }
    }

    #[test]
    fn foreground_for_2000x3000_into_1366x768() {
        // height-limited: 2000 * (768 / 3000) = 512 wide, centered at x = 427
        let (fg_cols, fg_rows) = foreground_dimensions(2000, 3000, 1366, 768);
        assert_eq!((fg_cols, fg_rows), (512, 768));
        assert_eq!((1366 - fg_cols) / 2, 427);
    }

    #[test]
    fn near_square_portrait_is_capped_to_canvas_width() {
        // 750x800 into 700x768: height-first scaling would give 720 wide,
        // so the width cap kicks in and the height shrinks below the canvas
        let (fg_cols, fg_rows) = foreground_dimensions(750, 800, 700, 768);
        assert_eq!(fg_cols, 700);
        assert_eq!(fg_rows, 747); // 800 * (700 / 750) = 746.7
        assert!(fg_rows < 768);
    }

    #[test]
    fn degenerate_sliver_keeps_at_least_one_column() {
        let (fg_cols, fg_rows) = foreground_dimensions(1, 10000, 1366, 768);
        assert_eq!((fg_cols, fg_rows), (1, 768));
    }

    #[test]
    fn composite_output_is_exactly_canvas_size() {
        let img = RgbImage::from_pixel(200, 300, Rgb([30, 60, 90]));
        let out = blur_composite(&img, &params(1366, 768, 40.0)).unwrap();
        assert_eq!(out.dimensions(), (1366, 768));
    }

    #[test]
    fn foreground_margins_are_centered_within_one_pixel() {
        let img = RgbImage::from_pixel(200, 300, Rgb([0, 0, 0]));
        let canvas = params(101, 60, 0.0);
        let (fg_cols, _) = foreground_dimensions(200, 300, 101, 60);
        let x_offset = (101 - fg_cols) / 2;
        let right = 101 - fg_cols - x_offset;
        assert!(x_offset.abs_diff(right) <= 1);
        // and the composite still fills the canvas exactly
        let out = blur_composite(&img, &canvas).unwrap();
        assert_eq!(out.dimensions(), (101, 60));
    }

    #[test]
    fn foreground_pixels_are_unblurred() {
        // Solid-color source: the centered foreground must be the exact
        // source color even when the background went through a heavy blur.
        let img = RgbImage::from_pixel(100, 300, Rgb([255, 0, 0]));
        let out = blur_composite(&img, &params(300, 90, 50.0)).unwrap();
        assert_eq!(*out.get_pixel(150, 45), Rgb([255, 0, 0]));
    }
}
