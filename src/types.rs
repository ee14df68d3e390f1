//! Shared types and enums used across photosquare.
//! Includes `CropStrategy`, `VignetteNormalization` and the `OverlaySpec`
//! color/opacity pair.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CropStrategy {
    /// Largest centered square; odd remainders are dropped on the right/bottom
    #[default]
    Center,
    /// No crop; the resampler stretches the full frame to the square target
    Skip,
}

impl std::fmt::Display for CropStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CropStrategy::Center => write!(f, "Center"),
            CropStrategy::Skip => write!(f, "Skip"),
        }
    }
}

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum VignetteNormalization {
    /// `255 * K / ||K||_F`; strength depends on resolution
    #[default]
    Frobenius,
    /// `K / max(K)`; peak is exactly 1.0 at every resolution
    Peak,
}

impl std::fmt::Display for VignetteNormalization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VignetteNormalization::Frobenius => write!(f, "Frobenius"),
            VignetteNormalization::Peak => write!(f, "Peak"),
        }
    }
}

/// Flat color layer composited over every image.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct OverlaySpec {
    pub color: [u8; 3],
    /// Fraction in [0, 1]
    pub opacity: f32,
}

impl Default for OverlaySpec {
    fn default() -> Self {
        Self {
            color: [0, 0, 0],
            opacity: 0.5,
        }
    }
}

impl OverlaySpec {
    pub fn new(color: [u8; 3], opacity: f32) -> Result<Self> {
        let spec = Self { color, opacity };
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(Error::InvalidArgument {
                arg: "overlay_opacity",
                value: self.opacity.to_string(),
            });
        }
        Ok(())
    }

    /// Alpha of the overlay layer: round(255 * opacity)
    pub fn alpha_u8(&self) -> u8 {
        (255.0 * self.opacity.clamp(0.0, 1.0)).round() as u8
    }
}

/// Parse an RGB color given as `r,g,b` (decimal) or `#rrggbb` / `rrggbb` (hex).
pub fn parse_rgb_color(value: &str) -> Result<[u8; 3]> {
    let invalid = || Error::InvalidArgument {
        arg: "overlay_color",
        value: value.to_string(),
    };
    let trimmed = value.trim();

    if trimmed.contains(',') {
        let parts: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(invalid());
        }
        let mut rgb = [0u8; 3];
        for (slot, part) in rgb.iter_mut().zip(parts) {
            *slot = part.parse::<u8>().map_err(|_| invalid())?;
        }
        return Ok(rgb);
    }

    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok([channel(0)?, channel(2)?, channel(4)?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_alpha_rounds() {
        assert_eq!(OverlaySpec::default().alpha_u8(), 128);
        assert_eq!(OverlaySpec::new([0, 0, 0], 0.0).unwrap().alpha_u8(), 0);
        assert_eq!(OverlaySpec::new([0, 0, 0], 1.0).unwrap().alpha_u8(), 255);
    }

    #[test]
    fn overlay_rejects_out_of_range_opacity() {
        assert!(OverlaySpec::new([0, 0, 0], 1.5).is_err());
        assert!(OverlaySpec::new([0, 0, 0], -0.1).is_err());
        assert!(OverlaySpec::new([0, 0, 0], f32::NAN).is_err());
    }

    #[test]
    fn parses_decimal_and_hex_colors() {
        assert_eq!(parse_rgb_color("0,0,0").unwrap(), [0, 0, 0]);
        assert_eq!(parse_rgb_color(" 255, 128 ,7").unwrap(), [255, 128, 7]);
        assert_eq!(parse_rgb_color("#ff8000").unwrap(), [255, 128, 0]);
        assert_eq!(parse_rgb_color("0A0B0C").unwrap(), [10, 11, 12]);
        assert!(parse_rgb_color("256,0,0").is_err());
        assert!(parse_rgb_color("1,2").is_err());
        assert!(parse_rgb_color("#12345").is_err());
    }
}
