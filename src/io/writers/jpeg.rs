use jpeg_encoder::{ColorType, Encoder};
use std::io::{BufWriter, Write};
use std::path::Path;

use image::RgbImage;
use tracing::debug;

use crate::error::{Error, Result};

/// Encode an RGB image as JPEG into a memory buffer.
pub fn encode_rgb_jpeg(img: &RgbImage, quality: u8) -> Result<Vec<u8>> {
    check_jpeg_dimensions(img)?;
    let mut buf = Vec::new();
    let encoder = Encoder::new(&mut buf, quality);
    encoder.encode(
        img.as_raw(),
        img.width() as u16,
        img.height() as u16,
        ColorType::Rgb,
    )?;
    Ok(buf)
}

/// Write an RGB image as JPEG to `output`, atomically: the bytes go to a
/// temporary file in the destination directory and are renamed into place on
/// success, so a failed encode never leaves a partial file at the final path.
pub fn write_rgb_jpeg(output: &Path, img: &RgbImage, quality: u8) -> Result<()> {
    check_jpeg_dimensions(img)?;

    let dir = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::Builder::new()
        .prefix(".framefit-")
        .suffix(".jpg")
        .tempfile_in(dir)?;

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        let encoder = Encoder::new(&mut writer, quality);
        encoder.encode(
            img.as_raw(),
            img.width() as u16,
            img.height() as u16,
            ColorType::Rgb,
        )?;
        writer.flush()?;
    }

    tmp.persist(output).map_err(|e| Error::Io(e.error))?;
    debug!("Wrote {}x{} JPEG to {:?}", img.width(), img.height(), output);
    Ok(())
}

/// JPEG stores dimensions as u16; anything larger cannot be encoded.
fn check_jpeg_dimensions(img: &RgbImage) -> Result<()> {
    if img.width() > u16::MAX as u32 || img.height() > u16::MAX as u32 {
        return Err(Error::InvalidArgument {
            arg: "jpeg dimensions",
            value: format!("{}x{}", img.width(), img.height()),
        });
    }
    Ok(())
}
