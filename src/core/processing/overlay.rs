//! Flat color overlay compositing.
//!
//! The base image is promoted to RGBA, a full-size overlay layer with constant
//! alpha `round(255 * opacity)` is composited over it with Porter-Duff "over",
//! and the result is flattened back to opaque RGB.

use tracing::info;

use crate::core::buffer::{Channels, PixelBuffer};
use crate::error::Result;
use crate::types::OverlaySpec;

/// Porter-Duff "over" of one RGBA source pixel onto one RGBA destination pixel.
fn composite_over(src: [u8; 4], dst: &[u8]) -> [u8; 4] {
    let sa = src[3] as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return [0, 0, 0, 0];
    }

    let blend = |s: u8, d: u8| -> u8 {
        let v = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
        v.round().clamp(0.0, 255.0) as u8
    };
    [
        blend(src[0], dst[0]),
        blend(src[1], dst[1]),
        blend(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ]
}

pub fn apply_color_overlay(src: &PixelBuffer, overlay: &OverlaySpec) -> Result<PixelBuffer> {
    let alpha = overlay.alpha_u8();
    info!(
        "Applying overlay color {:?} with alpha {}/255",
        overlay.color, alpha
    );

    let base = src.to_rgba();
    let [r, g, b] = overlay.color;
    let layer = [r, g, b, alpha];

    let mut composited = Vec::with_capacity(base.data().len());
    for px in base.data().chunks_exact(4) {
        composited.extend_from_slice(&composite_over(layer, px));
    }

    let rgba = PixelBuffer::new(base.width(), base.height(), Channels::Rgba, composited)?;
    Ok(rgba.flatten_to_rgb())
}
