use std::io::{BufRead, Cursor, Seek};
use std::path::Path;

use image::metadata::Orientation as ExifOrientation;
use image::{DynamicImage, ImageDecoder, ImageReader, RgbImage};

use crate::error::{Error, Result};

/// Decode a source photo from disk, honoring its EXIF orientation tag, and
/// convert to RGB8. Alpha and palette images are flattened to RGB.
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    decode_rgb(reader)
}

/// Same as [`load_rgb`] but for an in-memory byte buffer.
pub fn load_rgb_from_memory(bytes: &[u8]) -> Result<RgbImage> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    decode_rgb(reader)
}

fn decode_rgb<R: BufRead + Seek>(reader: ImageReader<R>) -> Result<RgbImage> {
    let mut decoder = reader.into_decoder()?;
    // Phones record rotation in EXIF rather than rotating pixels; apply it
    // before orientation classification or W/H are meaningless.
    let orientation = decoder
        .orientation()
        .unwrap_or(ExifOrientation::NoTransforms);
    let mut img = DynamicImage::from_decoder(decoder)?;
    img.apply_orientation(orientation);

    let rgb = img.into_rgb8();
    let (cols, rows) = rgb.dimensions();
    if cols == 0 || rows == 0 {
        return Err(Error::InvalidDimensions {
            width: cols,
            height: rows,
        });
    }
    Ok(rgb)
}
