//! High-level, ergonomic library API: normalize single photos to files or
//! in-memory buffers, plus a batch helper for directories. Prefer these
//! entrypoints over the low-level processing modules when embedding FRAMEFIT.
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::core::params::NormalizeParams;
use crate::core::processing::pipeline::normalize_image;
use crate::error::Result;
use crate::io::reader::{load_rgb, load_rgb_from_memory};
use crate::io::writers::jpeg::{encode_rgb_jpeg, write_rgb_jpeg};

/// Extensions recognized as source photos during directory processing.
const IMAGE_EXTENSIONS: [&str; 8] = ["jpg", "jpeg", "png", "bmp", "gif", "tiff", "tif", "webp"];

/// Outcome of a directory run. Failures are per-file and never abort the
/// batch; a retry of the same batch is idempotent.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Normalize encoded image bytes to encoded JPEG bytes (no disk I/O).
pub fn normalize_bytes_to_buffer(bytes: &[u8], params: &NormalizeParams) -> Result<Vec<u8>> {
    params.validate()?;
    let img = load_rgb_from_memory(bytes)?;
    let normalized = normalize_image(&img, params)?;
    encode_rgb_jpeg(&normalized, params.jpeg_quality)
}

/// Normalize one photo from disk and write the JPEG result to `output`.
/// The destination write is atomic; a failure leaves nothing at `output`.
pub fn normalize_file_to_path(input: &Path, output: &Path, params: &NormalizeParams) -> Result<()> {
    params.validate()?;
    let img = load_rgb(input)?;
    let normalized = normalize_image(&img, params)?;
    write_rgb_jpeg(output, &normalized, params.jpeg_quality)
}

fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Normalize every recognized photo in `input_dir` into `output_dir`.
///
/// Output names are `<stem>.jpg`. Existing outputs are skipped unless
/// `overwrite` is set. Per-file failures (corrupt input, unwritable output)
/// are logged and counted but never abort the rest of the batch.
pub fn process_directory_to_path(
    input_dir: &Path,
    output_dir: &Path,
    params: &NormalizeParams,
    overwrite: bool,
) -> Result<BatchReport> {
    params.validate()?;
    fs::create_dir_all(output_dir)?;

    let mut report = BatchReport::default();

    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() || !is_image_file(&path) {
            debug!("Skipping non-image entry: {:?}", path);
            continue;
        }

        // Stem-based naming so a PNG source and its JPEG output pair up
        let Some(stem) = path.file_stem() else {
            debug!("Skipping entry without a file stem: {:?}", path);
            continue;
        };
        let output_path = output_dir.join(stem).with_extension("jpg");

        if !overwrite && output_path.exists() {
            debug!("Skipping already processed: {:?}", path);
            report.skipped += 1;
            continue;
        }

        info!("Processing: {:?} -> {:?}", path, output_path);
        match normalize_file_to_path(&path, &output_path, params) {
            Ok(()) => {
                info!(
                    "Saved: {:?} ({}x{})",
                    output_path, params.canvas_width, params.canvas_height
                );
                report.processed += 1;
            }
            Err(e) => {
                warn!("Failed to process {:?}: {}", path, e);
                report.failed += 1;
            }
        }
    }

    info!(
        "Batch complete: {} processed, {} skipped, {} failed",
        report.processed, report.skipped, report.failed
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ResamplingFilter;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn test_params() -> NormalizeParams {
        NormalizeParams {
            canvas_width: 64,
            canvas_height: 36,
            blur_sigma: 5.0,
            jpeg_quality: 90,
            filter: ResamplingFilter::Bilinear,
        }
    }

    fn png_bytes(cols: u32, rows: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(cols, rows, Rgb([90, 120, 150])));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn buffer_roundtrip_hits_canvas_size() {
        for (cols, rows) in [(100u32, 50u32), (50, 100)] {
            let out = normalize_bytes_to_buffer(&png_bytes(cols, rows), &test_params()).unwrap();
            let decoded = image::load_from_memory(&out).unwrap();
            assert_eq!((decoded.width(), decoded.height()), (64, 36));
        }
    }

    #[test]
    fn batch_isolates_corrupt_files() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();

        for name in ["a.png", "b.png"] {
            std::fs::write(input.path().join(name), png_bytes(120, 80)).unwrap();
        }
        std::fs::write(input.path().join("broken.jpg"), b"not a jpeg").unwrap();
        std::fs::write(input.path().join("notes.txt"), b"ignored").unwrap();

        let report =
            process_directory_to_path(input.path(), output.path(), &test_params(), false).unwrap();

        assert_eq!(report.processed, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(report.skipped, 0);
        assert!(output.path().join("a.jpg").exists());
        assert!(output.path().join("b.jpg").exists());
        assert!(!output.path().join("broken.jpg").exists());
    }

    #[test]
    fn second_run_skips_existing_outputs() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        std::fs::write(input.path().join("a.png"), png_bytes(90, 90)).unwrap();

        let first =
            process_directory_to_path(input.path(), output.path(), &test_params(), false).unwrap();
        assert_eq!((first.processed, first.skipped), (1, 0));

        let second =
            process_directory_to_path(input.path(), output.path(), &test_params(), false).unwrap();
        assert_eq!((second.processed, second.skipped), (0, 1));

        let third =
            process_directory_to_path(input.path(), output.path(), &test_params(), true).unwrap();
        assert_eq!((third.processed, third.skipped), (1, 0));
    }

    #[test]
    fn batch_outputs_are_exactly_canvas_sized() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        std::fs::write(input.path().join("wide.png"), png_bytes(300, 100)).unwrap();
        std::fs::write(input.path().join("tall.png"), png_bytes(100, 300)).unwrap();

        process_directory_to_path(input.path(), output.path(), &test_params(), false).unwrap();

        for name in ["wide.jpg", "tall.jpg"] {
            let decoded = image::open(output.path().join(name)).unwrap();
            assert_eq!((decoded.width(), decoded.height()), (64, 36));
        }
    }
}
