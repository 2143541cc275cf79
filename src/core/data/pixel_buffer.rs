use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 3;

#[must_use]
pub fn row_size_in_bytes(size: u32) -> usize {
    size as usize * BYTES_PER_PIXEL
}

fn buffer_size_in_bytes(size: u32) -> usize {
    row_size_in_bytes(size) * size as usize
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    ZeroSize,
    PixelOutsideBounds { pixel: Point, size: u32 },
    RowOutsideBounds { y: u32, size: u32 },
    RowLengthMismatch { expected: usize, actual: usize },
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize => write!(f, "pixel buffer size must be greater than zero"),
            Self::PixelOutsideBounds { pixel, size } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} buffer",
                    pixel.x, pixel.y, size, size
                )
            }
            Self::RowOutsideBounds { y, size } => {
                write!(f, "row {} outside of {}x{} buffer", y, size, size)
            }
            Self::RowLengthMismatch { expected, actual } => {
                write!(f, "row has {} pixels, expected {}", actual, expected)
            }
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "expected buffer size {} does not match buffer size {}",
                    expected_size, buffer_size
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// A square RGB image, row-major, three bytes per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    size: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn new(size: u32) -> Result<Self, PixelBufferError> {
        if size == 0 {
            return Err(PixelBufferError::ZeroSize);
        }

        Ok(Self {
            size,
            buffer: vec![0; buffer_size_in_bytes(size)],
        })
    }

    pub fn from_data(size: u32, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        if size == 0 {
            return Err(PixelBufferError::ZeroSize);
        }

        let expected_size = buffer_size_in_bytes(size);

        if expected_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { size, buffer })
    }

    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn into_data(self) -> PixelBufferData {
        self.buffer
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.pixel_index(pixel)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.pixel_index(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn row(&self, y: u32) -> Result<&[u8], PixelBufferError> {
        if y >= self.size {
            return Err(PixelBufferError::RowOutsideBounds { y, size: self.size });
        }

        let row_bytes = row_size_in_bytes(self.size);
        let start = y as usize * row_bytes;

        Ok(&self.buffer[start..start + row_bytes])
    }

    fn pixel_index(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if pixel.x >= self.size || pixel.y >= self.size {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                size: self.size,
            });
        }

        Ok(pixel.y as usize * row_size_in_bytes(self.size) + pixel.x as usize * BYTES_PER_PIXEL)
    }
}
