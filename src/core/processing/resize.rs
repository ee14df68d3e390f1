use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use tracing::info;

use crate::core::buffer::{Channels, PixelBuffer};
use crate::error::{Error, Result};

fn pixel_type(channels: Channels) -> PixelType {
    match channels {
        Channels::Rgb => PixelType::U8x3,
        Channels::Rgba => PixelType::U8x4,
    }
}

/// Resample to exactly `target_cols x target_rows` with a Lanczos3 convolution.
pub fn resize_exact(
    src: &PixelBuffer,
    target_cols: usize,
    target_rows: usize,
) -> Result<PixelBuffer> {
    if target_cols == 0 || target_rows == 0 {
        return Err(Error::ZeroSize {
            size: target_cols.min(target_rows),
        });
    }

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();
    let pixel_type = pixel_type(src.channels());

    let src_image = Image::from_vec_u8(
        src.width() as u32,
        src.height() as u32,
        src.data().to_vec(),
        pixel_type,
    )
    .map_err(Error::external)?;
    let mut dst_image = Image::new(target_cols as u32, target_rows as u32, pixel_type);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::external)?;

    PixelBuffer::new(
        target_cols,
        target_rows,
        src.channels(),
        dst_image.into_vec(),
    )
}

/// Resample to a `size x size` square. Input already at that size is returned unchanged.
pub fn resize_to_square(src: &PixelBuffer, size: usize) -> Result<PixelBuffer> {
    if src.width() == size && src.height() == size {
        info!("Image already {}x{}, skipping resize", size, size);
        return Ok(src.clone());
    }

    info!(
        "Original size: {}x{}, New size: {}x{}",
        src.width(),
        src.height(),
        size,
        size
    );
    resize_exact(src, size, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_has_target_dimensions() {
        let src = PixelBuffer::filled(40, 25, &[10, 20, 30]).unwrap();
        let out = resize_to_square(&src, 16).unwrap();
        assert_eq!((out.width(), out.height()), (16, 16));
        assert_eq!(out.channels(), Channels::Rgb);

        let up = resize_to_square(&src, 64).unwrap();
        assert_eq!((up.width(), up.height()), (64, 64));
    }

    #[test]
    fn preserves_channel_count_and_flat_color() {
        let src = PixelBuffer::filled(30, 30, &[200, 100, 50, 255]).unwrap();
        let out = resize_to_square(&src, 12).unwrap();
        assert_eq!(out.channels(), Channels::Rgba);
        for px in out.data().chunks_exact(4) {
            assert!((px[0] as i32 - 200).abs() <= 1);
            assert!((px[1] as i32 - 100).abs() <= 1);
            assert!((px[2] as i32 - 50).abs() <= 1);
        }
    }

    #[test]
    fn target_sized_input_is_identical() {
        let data: Vec<u8> = (0..8 * 8 * 3).map(|v| (v * 7 % 256) as u8).collect();
        let src = PixelBuffer::new(8, 8, Channels::Rgb, data).unwrap();
        assert_eq!(resize_to_square(&src, 8).unwrap(), src);
    }

    #[test]
    fn zero_target_is_rejected() {
        let src = PixelBuffer::filled(4, 4, &[0, 0, 0]).unwrap();
        assert!(resize_exact(&src, 0, 4).is_err());
    }
}
