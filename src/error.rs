//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, decode, and encode errors, and provides semantic
//! variants for argument validation and resize failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("JPEG encode error: {0}")]
    Encode(#[from] jpeg_encoder::EncodingError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Resize error: {0}")]
    Resize(String),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Params file error: {0}")]
    Params(#[from] serde_json::Error),
}
