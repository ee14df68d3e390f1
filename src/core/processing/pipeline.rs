use tracing::debug;

use crate::core::buffer::PixelBuffer;
use crate::core::params::ProcessingParams;
use crate::core::processing::crop::apply_crop_strategy;
use crate::core::processing::overlay::apply_color_overlay;
use crate::core::processing::resize::resize_to_square;
use crate::core::processing::vignette::apply_vignette;
use crate::error::Result;

/// Run crop -> resize -> overlay -> vignette. The result is always opaque RGB
/// of `params.size x params.size`.
pub fn process_pixels(input: PixelBuffer, params: &ProcessingParams) -> Result<PixelBuffer> {
    debug!("Stage 1/4: crop ({})", params.crop);
    let cropped = apply_crop_strategy(input, params.crop)?;

    debug!("Stage 2/4: resize to {}", params.size);
    let resized = resize_to_square(&cropped, params.size)?;
    drop(cropped);

    debug!("Stage 3/4: overlay");
    let overlaid = apply_color_overlay(&resized, &params.overlay)?;
    drop(resized);

    debug!("Stage 4/4: vignette");
    apply_vignette(
        &overlaid,
        params.vignette_intensity,
        params.vignette_normalization,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::buffer::Channels;
    use crate::types::{OverlaySpec, VignetteNormalization};

    #[test]
    fn landscape_input_becomes_target_square() {
        let src = PixelBuffer::filled(96, 54, &[120, 60, 30]).unwrap();
        let params = ProcessingParams { size: 32, ..Default::default() };
        let out = process_pixels(src, &params).unwrap();
        assert_eq!((out.width(), out.height()), (32, 32));
        assert_eq!(out.channels(), Channels::Rgb);
    }

    #[test]
    fn neutral_params_only_crop_and_resize() {
        let src = PixelBuffer::filled(20, 10, &[90, 80, 70, 255]).unwrap();
        let params = ProcessingParams {
            size: 10,
            overlay: OverlaySpec::new([0, 0, 0], 0.0).unwrap(),
            vignette_intensity: 0,
            vignette_normalization: VignetteNormalization::Peak,
            ..Default::default()
        };
        let out = process_pixels(src, &params).unwrap();
        assert_eq!((out.width(), out.height()), (10, 10));
        for px in out.data().chunks_exact(3) {
            assert_eq!(px, &[90, 80, 70]);
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        let data: Vec<u8> = (0..50 * 30 * 3).map(|v| (v * 31 % 251) as u8).collect();
        let src = PixelBuffer::new(50, 30, Channels::Rgb, data).unwrap();
        let params = ProcessingParams { size: 24, ..Default::default() };
        let a = process_pixels(src.clone(), &params).unwrap();
        let b = process_pixels(src, &params).unwrap();
        assert_eq!(a, b);
    }
}
