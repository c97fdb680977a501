//! I/O layer: decoding source photos (with EXIF orientation applied) and
//! encoding normalized output as JPEG with atomic destination writes.
pub mod reader;
pub use reader::{load_rgb, load_rgb_from_memory};

pub mod writers;
