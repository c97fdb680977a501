//! Shared types and enums used across FRAMEFIT.
//! Includes `ResamplingFilter` (a closed set of interpolation kernels mapped to
//! `fast_image_resize` constants) and `Orientation` with its classification rule.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum ResamplingFilter {
    Lanczos3,
    Bilinear,
    Bicubic,
}

impl ResamplingFilter {
    /// Map to the underlying resize kernel. Bicubic uses the Catmull-Rom
    /// spline, the conventional bicubic interpolation kernel.
    pub fn filter_type(self) -> fast_image_resize::FilterType {
        match self {
            ResamplingFilter::Lanczos3 => fast_image_resize::FilterType::Lanczos3,
            ResamplingFilter::Bilinear => fast_image_resize::FilterType::Bilinear,
            ResamplingFilter::Bicubic => fast_image_resize::FilterType::CatmullRom,
        }
    }
}

impl std::fmt::Display for ResamplingFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ResamplingFilter::Lanczos3 => "Lanczos3",
            ResamplingFilter::Bilinear => "Bilinear",
            ResamplingFilter::Bicubic => "Bicubic",
        };
        write!(f, "{}", s)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Orientation {
    /// Classify by aspect. A square image (W == H) counts as landscape; the
    /// tie-break is arbitrary but load-bearing for behavioral compatibility.
    pub fn classify(width: u32, height: u32) -> Self {
        if width >= height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Landscape => write!(f, "Landscape"),
            Orientation::Portrait => write!(f, "Portrait"),
        }
    }
}
