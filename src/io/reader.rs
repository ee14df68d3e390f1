use std::path::Path;

use image::{DynamicImage, ImageReader};
use tracing::info;

use crate::core::buffer::{Channels, PixelBuffer};
use crate::error::{Error, Result};

/// Convert a decoded image into an 8-bit buffer. Sources with alpha become
/// RGBA; everything else (gray, 16-bit, CMYK-converted) becomes RGB.
pub fn from_dynamic(image: DynamicImage) -> Result<PixelBuffer> {
    let (width, height) = (image.width() as usize, image.height() as usize);
    if image.color().has_alpha() {
        PixelBuffer::new(width, height, Channels::Rgba, image.to_rgba8().into_raw())
    } else {
        PixelBuffer::new(width, height, Channels::Rgb, image.to_rgb8().into_raw())
    }
}

/// Decode an image file. The format is sniffed from the content, not the extension.
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    let load_err = |reason: String| Error::Load {
        path: path.to_path_buf(),
        reason,
    };

    let image = ImageReader::open(path)
        .map_err(|e| load_err(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| load_err(e.to_string()))?
        .decode()
        .map_err(|e| load_err(e.to_string()))?;

    info!(
        "Loaded {:?}: {}x{} {:?}",
        path,
        image.width(),
        image.height(),
        image.color()
    );

    from_dynamic(image).map_err(|e| load_err(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgba, RgbaImage};

    #[test]
    fn gray_sources_become_rgb() {
        let gray = GrayImage::from_pixel(3, 2, Luma([77]));
        let buf = from_dynamic(DynamicImage::ImageLuma8(gray)).unwrap();
        assert_eq!(buf.channels(), Channels::Rgb);
        assert_eq!(buf.pixel(2, 1), &[77, 77, 77]);
    }

    #[test]
    fn alpha_sources_keep_alpha() {
        let rgba = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 4]));
        let buf = from_dynamic(DynamicImage::ImageRgba8(rgba)).unwrap();
        assert_eq!(buf.channels(), Channels::Rgba);
        assert_eq!(buf.pixel(1, 1), &[1, 2, 3, 4]);
    }

    #[test]
    fn missing_and_corrupt_files_are_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.jpg");
        assert!(matches!(load_image(&missing), Err(Error::Load { .. })));

        let corrupt = dir.path().join("corrupt.jpg");
        std::fs::write(&corrupt, b"definitely not a jpeg").unwrap();
        assert!(matches!(load_image(&corrupt), Err(Error::Load { .. })));
    }
}
