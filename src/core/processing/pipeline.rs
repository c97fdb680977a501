use image::RgbImage;
use tracing::info;

use crate::core::params::NormalizeParams;
use crate::core::processing::composite::blur_composite;
use crate::core::processing::cover::cover_crop;
use crate::error::{Error, Result};
use crate::types::Orientation;

/// Normalize one decoded image to exactly the configured canvas size.
///
/// Pure function from (image, params) to image: landscape sources (W >= H,
/// square counts as landscape) go through cover/crop, portrait sources
/// through the blur composite. Either way the result is exactly
/// (canvas_width, canvas_height).
pub fn normalize_image(img: &RgbImage, params: &NormalizeParams) -> Result<RgbImage> {
    params.validate()?;

    let (cols, rows) = img.dimensions();
    if cols == 0 || rows == 0 {
        return Err(Error::InvalidDimensions {
            width: cols,
            height: rows,
        });
    }

    let orientation = Orientation::classify(cols, rows);
    info!("Processing as {}: {}x{}", orientation, cols, rows);

    match orientation {
        Orientation::Landscape => {
            cover_crop(img, params.canvas_width, params.canvas_height, params.filter)
        }
        Orientation::Portrait => blur_composite(img, params),
    }
}
