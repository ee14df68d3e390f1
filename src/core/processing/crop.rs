use tracing::info;

use crate::core::buffer::PixelBuffer;
use crate::error::{Error, Result};
use crate::types::CropStrategy;

/// Half-open crop window `[left, right) x [top, bottom)` into a source buffer.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CropRect {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

impl CropRect {
    pub fn width(&self) -> usize {
        self.right - self.left
    }

    pub fn height(&self) -> usize {
        self.bottom - self.top
    }

    pub fn side(&self) -> usize {
        self.width()
    }
}

/// Largest centered square inside a `cols x rows` frame.
///
/// The offset is floored, so with an odd difference the extra pixel is
/// dropped from the right (landscape) or bottom (portrait) edge.
pub fn center_square_rect(cols: usize, rows: usize) -> CropRect {
    if cols > rows {
        let left = (cols - rows) / 2;
        CropRect {
            left,
            top: 0,
            right: left + rows,
            bottom: rows,
        }
    } else {
        let top = (rows - cols) / 2;
        CropRect {
            left: 0,
            top,
            right: cols,
            bottom: top + cols,
        }
    }
}

pub fn crop(src: &PixelBuffer, rect: CropRect) -> Result<PixelBuffer> {
    if rect.left >= rect.right
        || rect.top >= rect.bottom
        || rect.right > src.width()
        || rect.bottom > src.height()
    {
        return Err(Error::Processing(format!(
            "Crop window {:?} outside {}x{} image",
            rect,
            src.width(),
            src.height()
        )));
    }

    let n = src.channels().count();
    let stride = src.stride();
    let row_bytes = rect.width() * n;
    let mut cropped = Vec::with_capacity(row_bytes * rect.height());
    // Copy per row using slice copies to minimize per-pixel indexing
    for row in rect.top..rect.bottom {
        let src_offset = row * stride + rect.left * n;
        cropped.extend_from_slice(&src.data()[src_offset..src_offset + row_bytes]);
    }

    PixelBuffer::new(rect.width(), rect.height(), src.channels(), cropped)
}

pub fn crop_to_square(src: &PixelBuffer) -> Result<PixelBuffer> {
    let rect = center_square_rect(src.width(), src.height());
    info!(
        "Center crop: {}x{} -> {}x{} at ({}, {})",
        src.width(),
        src.height(),
        rect.side(),
        rect.side(),
        rect.left,
        rect.top
    );
    crop(src, rect)
}

pub fn apply_crop_strategy(src: PixelBuffer, strategy: CropStrategy) -> Result<PixelBuffer> {
    match strategy {
        CropStrategy::Center => crop_to_square(&src),
        CropStrategy::Skip => Ok(src),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::buffer::Channels;

    fn gradient(cols: usize, rows: usize) -> PixelBuffer {
        let mut data = Vec::with_capacity(cols * rows * 3);
        for y in 0..rows {
            for x in 0..cols {
                data.extend_from_slice(&[x as u8, y as u8, 7]);
            }
        }
        PixelBuffer::new(cols, rows, Channels::Rgb, data).unwrap()
    }

    #[test]
    fn landscape_full_hd_offsets() {
        let rect = center_square_rect(1920, 1080);
        assert_eq!(rect, CropRect { left: 420, top: 0, right: 1500, bottom: 1080 });
        assert_eq!(rect.side(), 1080);
    }

    #[test]
    fn rect_is_square_and_inside_for_many_shapes() {
        for cols in 1..24 {
            for rows in 1..24 {
                let rect = center_square_rect(cols, rows);
                assert_eq!(rect.width(), rect.height());
                assert_eq!(rect.side(), cols.min(rows));
                assert!(rect.right <= cols && rect.bottom <= rows);
                if cols > rows {
                    assert_eq!(rect.left, (cols - rows) / 2);
                    assert_eq!(rect.top, 0);
                } else {
                    assert_eq!(rect.top, (rows - cols) / 2);
                    assert_eq!(rect.left, 0);
                }
            }
        }
    }

    #[test]
    fn odd_difference_drops_trailing_pixel() {
        // 5 - 2 = 3 spare columns: one on the left, two on the right
        let rect = center_square_rect(5, 2);
        assert_eq!((rect.left, rect.right), (1, 3));
        let rect = center_square_rect(2, 5);
        assert_eq!((rect.top, rect.bottom), (1, 3));
    }

    #[test]
    fn square_input_is_unchanged() {
        let src = gradient(6, 6);
        assert_eq!(crop_to_square(&src).unwrap(), src);
    }

    #[test]
    fn crop_copies_the_centered_window() {
        let src = gradient(7, 3);
        let out = crop_to_square(&src).unwrap();
        assert_eq!((out.width(), out.height()), (3, 3));
        assert_eq!(out.pixel(0, 0), &[2, 0, 7]);
        assert_eq!(out.pixel(2, 2), &[4, 2, 7]);
    }

    #[test]
    fn rejects_window_outside_source() {
        let src = gradient(4, 4);
        let rect = CropRect { left: 2, top: 0, right: 5, bottom: 3 };
        assert!(crop(&src, rect).is_err());
    }

    #[test]
    fn skip_strategy_passes_through() {
        let src = gradient(8, 3);
        let out = apply_crop_strategy(src.clone(), CropStrategy::Skip).unwrap();
        assert_eq!(out, src);
    }
}
