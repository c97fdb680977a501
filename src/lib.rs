#![doc = r#"
FRAMEFIT — a photo normalizer for fixed-resolution slideshow displays.

This crate turns arbitrary source photos (any aspect ratio, orientation, and
resolution; common formats) into images of exactly one configured canvas size,
so a downstream slideshow viewer never has to scale at render time. It powers
the FRAMEFIT CLI and can be embedded in your own Rust applications.

Two deterministic strategies, selected by orientation:

- **Landscape** (width >= height; a square counts as landscape): scale to
  fully cover the canvas, then center-crop to the exact size.
- **Portrait**: a gaussian-blurred duplicate is cover/cropped to the canvas as
  a background, and the unblurred photo is scaled to canvas height (capped to
  canvas width for near-square portraits) and pasted centered on top. No
  letterbox bars, no destructive cropping of the subject.

Every call is a pure function of (image bytes, parameters); there is no
ambient configuration state.

Quick start: normalize a file to a path
---------------------------------------
```rust,no_run
use std::path::Path;
use framefit::{NormalizeParams, ResamplingFilter, normalize_file_to_path};

fn main() -> framefit::Result<()> {
    let params = NormalizeParams {
        canvas_width: 1366,
        canvas_height: 768,
        blur_sigma: 40.0,
        jpeg_quality: 90,
        filter: ResamplingFilter::Lanczos3,
    };

    normalize_file_to_path(
        Path::new("/photos/raw/IMG_0421.jpg"),
        Path::new("/photos/processed/IMG_0421.jpg"),
        &params,
    )
}
```

Process in-memory
-----------------
```rust,no_run
use framefit::{NormalizeParams, normalize_bytes_to_buffer};

fn main() -> framefit::Result<()> {
    let source = std::fs::read("/photos/raw/IMG_0421.jpg")?;
    let jpeg = normalize_bytes_to_buffer(&source, &NormalizeParams::default())?;
    std::fs::write("/tmp/preview.jpg", jpeg)?;
    Ok(())
}
```

Batch helper
------------
```rust,no_run
use std::path::Path;
use framefit::{NormalizeParams, process_directory_to_path};

fn main() -> framefit::Result<()> {
    let report = process_directory_to_path(
        Path::new("/photos/raw"),
        Path::new("/photos/processed"),
        &NormalizeParams::default(),
        false, // skip files whose output already exists
    )?;

    println!(
        "processed={} skipped={} failed={}",
        report.processed, report.skipped, report.failed
    );
    Ok(())
}
```

Per-file failures inside a batch (corrupt file, unwritable output) are logged
and counted in the [`BatchReport`]; they never abort the remaining files.
Destination writes are atomic: a failed transform leaves nothing at the
output path.

Error handling
--------------
All public functions return `framefit::Result<T>`; match on `framefit::Error`
to handle specific cases, e.g. decode failures.

```rust,no_run
use std::path::Path;
use framefit::{Error, NormalizeParams, normalize_file_to_path};

fn main() {
    let params = NormalizeParams::default();
    match normalize_file_to_path(Path::new("/bad.jpg"), Path::new("/out.jpg"), &params) {
        Ok(()) => {}
        Err(Error::Decode(e)) => eprintln!("Not a valid image: {e}"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — enums and core types (`ResamplingFilter`, `Orientation`).
- [`io`] — photo decoding and JPEG writing.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::params::NormalizeParams;
pub use error::{Error, Result};
pub use types::{Orientation, ResamplingFilter};

// Processing primitives
pub use core::processing::pipeline::normalize_image;

// Readers and writers
pub use io::reader::{load_rgb, load_rgb_from_memory};
pub use io::writers::jpeg::{encode_rgb_jpeg, write_rgb_jpeg};

// High-level API re-exports
pub use api::{
    BatchReport, normalize_bytes_to_buffer, normalize_file_to_path, process_directory_to_path,
};
