use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::ResamplingFilter;

/// Normalization parameters suitable for config files and CLI presets.
///
/// Passed explicitly into every call; the normalizer reads no ambient or
/// global configuration state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeParams {
    /// Canvas width in pixels, matching the physical display
    pub canvas_width: u32,
    /// Canvas height in pixels, matching the physical display
    pub canvas_height: u32,
    /// Gaussian blur sigma for the portrait background layer
    pub blur_sigma: f32,
    /// JPEG quality factor, 1-100
    pub jpeg_quality: u8,
    /// Interpolation kernel used for all scaling operations
    pub filter: ResamplingFilter,
}

impl Default for NormalizeParams {
    fn default() -> Self {
        Self {
            canvas_width: 1920,
            canvas_height: 1080,
            blur_sigma: 40.0,
            jpeg_quality: 90,
            filter: ResamplingFilter::Lanczos3,
        }
    }
}

/// JPEG dimensions are encoded as u16, so the canvas cannot exceed this.
const MAX_CANVAS_DIM: u32 = u16::MAX as u32;

impl NormalizeParams {
    pub fn validate(&self) -> Result<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        if self.canvas_width > MAX_CANVAS_DIM || self.canvas_height > MAX_CANVAS_DIM {
            return Err(Error::InvalidArgument {
                arg: "canvas size",
                value: format!("{}x{}", self.canvas_width, self.canvas_height),
            });
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(Error::InvalidArgument {
                arg: "jpeg_quality",
                value: self.jpeg_quality.to_string(),
            });
        }
        if !self.blur_sigma.is_finite() || self.blur_sigma < 0.0 {
            return Err(Error::InvalidArgument {
                arg: "blur_sigma",
                value: self.blur_sigma.to_string(),
            });
        }
        Ok(())
    }

    /// Load parameters from a JSON preset file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&contents)?;
        params.validate()?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_are_valid() {
        assert!(NormalizeParams::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_canvas() {
        let params = NormalizeParams {
            canvas_width: 0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_quality() {
        for quality in [0u8, 101] {
            let params = NormalizeParams {
                jpeg_quality: quality,
                ..Default::default()
            };
            assert!(params.validate().is_err());
        }
    }

    #[test]
    fn rejects_negative_blur() {
        let params = NormalizeParams {
            blur_sigma: -1.0,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn roundtrips_through_json() {
        let params = NormalizeParams::default();
        let json = serde_json::to_string(&params).unwrap();
        let back: NormalizeParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back.canvas_width, params.canvas_width);
        assert_eq!(back.canvas_height, params.canvas_height);
        assert_eq!(back.filter, params.filter);
    }
}
