//! Radial vignette driven by a separable 2D Gaussian mask.
//!
//! Two 1D Gaussian kernels (one per axis, sigma = half the axis length) are
//! combined by outer product into a `(rows, cols)` mask, normalized, and every
//! RGB channel is scaled by `1 + intensity/100 * mask`.
//!
//! With [`VignetteNormalization::Frobenius`] the mask is `255 * K / ||K||_F`.
//! Its peak therefore shrinks as the pixel count grows, so the same intensity
//! is weaker on larger images. [`VignetteNormalization::Peak`] pins the peak
//! at 1.0 instead.
//!
//! Scaled values are clamped to `[0, 255]` and then truncated toward zero.

use ndarray::{Array1, Array2, Array3, Axis, Zip};
use tracing::{debug, info};

use crate::core::buffer::{Channels, PixelBuffer};
use crate::error::{Error, Result};
use crate::types::VignetteNormalization;

/// Sum-normalized Gaussian of `len` taps with sigma = `len / 2`, centered at `(len - 1) / 2`.
pub fn gaussian_kernel(len: usize) -> Array1<f64> {
    let sigma = len as f64 / 2.0;
    let scale = -0.5 / (sigma * sigma);
    let center = (len as f64 - 1.0) * 0.5;

    let mut kernel = Array1::from_shape_fn(len, |i| {
        let x = i as f64 - center;
        (scale * x * x).exp()
    });
    let sum = kernel.sum();
    kernel.mapv_inplace(|v| v / sum);
    kernel
}

/// Non-negative weight per pixel, shaped `(rows, cols)`.
pub fn vignette_mask(rows: usize, cols: usize, normalization: VignetteNormalization) -> Array2<f64> {
    let ky = gaussian_kernel(rows);
    let kx = gaussian_kernel(cols);
    let kernel = Array2::from_shape_fn((rows, cols), |(i, j)| ky[i] * kx[j]);

    match normalization {
        VignetteNormalization::Frobenius => {
            let norm = kernel.iter().map(|v| v * v).sum::<f64>().sqrt();
            kernel.mapv(|v| 255.0 * v / norm)
        }
        VignetteNormalization::Peak => {
            let peak = kernel.iter().copied().fold(0.0_f64, f64::max);
            kernel.mapv(|v| v / peak)
        }
    }
}

/// Scale every RGB channel by `1 + intensity/100 * mask`. RGBA input is flattened first.
pub fn apply_vignette(
    src: &PixelBuffer,
    intensity: i32,
    normalization: VignetteNormalization,
) -> Result<PixelBuffer> {
    let rgb = src.flatten_to_rgb();
    let (rows, cols) = (rgb.height(), rgb.width());

    info!(
        "Applying vignette: intensity={} normalization={} size={}x{}",
        intensity, normalization, cols, rows
    );

    let mask = vignette_mask(rows, cols, normalization);
    debug!(
        "Vignette mask peak={:.6} corner={:.6}",
        mask[[rows / 2, cols / 2]],
        mask[[0, 0]]
    );

    let strength = intensity as f64 / 100.0;
    let mut pixels = Array3::from_shape_vec((rows, cols, 3), rgb.into_vec())
        .map_err(|e| Error::Processing(format!("Vignette buffer shape: {}", e)))?;

    Zip::from(pixels.lanes_mut(Axis(2)))
        .and(&mask)
        .for_each(|mut px, &m| {
            let factor = 1.0 + strength * m;
            px.mapv_inplace(|v| (v as f64 * factor).clamp(0.0, 255.0) as u8);
        });

    PixelBuffer::new(cols, rows, Channels::Rgb, pixels.into_raw_vec())
}
