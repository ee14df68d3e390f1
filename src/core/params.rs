use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{CropStrategy, OverlaySpec, VignetteNormalization};

/// Largest side jpeg-encoder can write
pub const MAX_TARGET_SIZE: usize = u16::MAX as usize;

/// Processing parameters suitable for config files and CLI presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingParams {
    pub crop: CropStrategy,
    /// Side of the square output in pixels
    pub size: usize,
    pub overlay: OverlaySpec,
    /// Signed percentage in [-100, 100]; negative darkens toward the mask peak
    pub vignette_intensity: i32,
    pub vignette_normalization: VignetteNormalization,
    /// JPEG quality, 1..=100
    pub quality: u8,
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self {
            crop: CropStrategy::Center,
            size: 1080,
            overlay: OverlaySpec::default(),
            vignette_intensity: -50,
            vignette_normalization: VignetteNormalization::Frobenius,
            quality: 90,
        }
    }
}

impl ProcessingParams {
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::ZeroSize { size: self.size });
        }
        if self.size > MAX_TARGET_SIZE {
            return Err(Error::InvalidArgument {
                arg: "size",
                value: self.size.to_string(),
            });
        }
        self.overlay.validate()?;
        if !(-100..=100).contains(&self.vignette_intensity) {
            return Err(Error::InvalidArgument {
                arg: "vignette_intensity",
                value: self.vignette_intensity.to_string(),
            });
        }
        if !(1..=100).contains(&self.quality) {
            return Err(Error::InvalidArgument {
                arg: "quality",
                value: self.quality.to_string(),
            });
        }
        Ok(())
    }
}
