use tracing::debug;

use crate::error::{Error, Result};

/// Interleaved channel layout of a [`PixelBuffer`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Channels {
    Rgb,
    Rgba,
}

impl Channels {
    pub fn count(self) -> usize {
        match self {
            Channels::Rgb => 3,
            Channels::Rgba => 4,
        }
    }
}

/// Owned 8-bit image, row-major, channels interleaved.
///
/// Width and height are always non-zero and `data.len()` always equals
/// `width * height * channels`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    channels: Channels,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize, channels: Channels, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::Processing(format!(
                "Image has zero area: {}x{}",
                width, height
            )));
        }
        let expected = width * height * channels.count();
        if data.len() != expected {
            return Err(Error::Processing(format!(
                "Buffer length {} does not match {}x{}x{} = {}",
                data.len(),
                width,
                height,
                channels.count(),
                expected
            )));
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Buffer where every pixel is `pixel` (its length selects RGB or RGBA).
    pub fn filled(width: usize, height: usize, pixel: &[u8]) -> Result<Self> {
        let channels = match pixel.len() {
            3 => Channels::Rgb,
            4 => Channels::Rgba,
            n => {
                return Err(Error::Processing(format!(
                    "Unsupported channel count: {}",
                    n
                )));
            }
        };
        let data = pixel.repeat(width * height);
        Self::new(width, height, channels, data)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> Channels {
        self.channels
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Bytes per row
    pub fn stride(&self) -> usize {
        self.width * self.channels.count()
    }

    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        let n = self.channels.count();
        let offset = y * self.stride() + x * n;
        &self.data[offset..offset + n]
    }

    /// Promote to RGBA with an opaque alpha channel; RGBA input is returned as is.
    pub fn to_rgba(&self) -> PixelBuffer {
        match self.channels {
            Channels::Rgba => self.clone(),
            Channels::Rgb => {
                debug!("Promoting {}x{} RGB buffer to RGBA", self.width, self.height);
                let mut data = Vec::with_capacity(self.width * self.height * 4);
                for px in self.data.chunks_exact(3) {
                    data.extend_from_slice(px);
                    data.push(u8::MAX);
                }
                PixelBuffer {
                    width: self.width,
                    height: self.height,
                    channels: Channels::Rgba,
                    data,
                }
            }
        }
    }

    /// Drop the alpha channel; RGB input is returned as is.
    pub fn flatten_to_rgb(&self) -> PixelBuffer {
        match self.channels {
            Channels::Rgb => self.clone(),
            Channels::Rgba => {
                let mut data = Vec::with_capacity(self.width * self.height * 3);
                for px in self.data.chunks_exact(4) {
                    data.extend_from_slice(&px[..3]);
                }
                PixelBuffer {
                    width: self.width,
                    height: self.height,
                    channels: Channels::Rgb,
                    data,
                }
            }
        }
    }
}
