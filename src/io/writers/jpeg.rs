use jpeg_encoder::{ColorType, Encoder};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::core::buffer::{Channels, PixelBuffer};
use crate::error::{Error, Result};

fn check_dimensions(cols: usize, rows: usize) -> Result<(u16, u16)> {
    let cols = u16::try_from(cols).map_err(|_| Error::InvalidArgument {
        arg: "width",
        value: cols.to_string(),
    })?;
    let rows = u16::try_from(rows).map_err(|_| Error::InvalidArgument {
        arg: "height",
        value: rows.to_string(),
    })?;
    Ok((cols, rows))
}

/// Encode interleaved RGB bytes to an in-memory JPEG.
pub fn encode_rgb_jpeg(cols: usize, rows: usize, rgb_data: &[u8], quality: u8) -> Result<Vec<u8>> {
    let (cols, rows) = check_dimensions(cols, rows)?;
    let mut out = Vec::new();
    let encoder = Encoder::new(&mut out, quality);
    encoder
        .encode(rgb_data, cols, rows, ColorType::Rgb)
        .map_err(Error::external)?;
    Ok(out)
}

pub fn write_rgb_jpeg(
    output: &Path,
    cols: usize,
    rows: usize,
    rgb_data: &[u8],
    quality: u8,
) -> Result<()> {
    let write_err = |reason: String| Error::Write {
        path: output.to_path_buf(),
        reason,
    };

    let (cols, rows) = check_dimensions(cols, rows)?;
    let file = File::create(output).map_err(|e| write_err(e.to_string()))?;
    let mut writer = BufWriter::new(file);
    let encoder = Encoder::new(&mut writer, quality);
    encoder
        .encode(rgb_data, cols, rows, ColorType::Rgb)
        .map_err(|e| write_err(e.to_string()))?;
    Ok(())
}

/// Write a buffer as a 3-channel JPEG, flattening any alpha first.
pub fn write_buffer_jpeg(output: &Path, buffer: &PixelBuffer, quality: u8) -> Result<()> {
    match buffer.channels() {
        Channels::Rgb => write_rgb_jpeg(output, buffer.width(), buffer.height(), buffer.data(), quality),
        Channels::Rgba => {
            let rgb = buffer.flatten_to_rgb();
            write_rgb_jpeg(output, rgb.width(), rgb.height(), rgb.data(), quality)
        }
    }
}
