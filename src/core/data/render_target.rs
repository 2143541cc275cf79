use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{
    BYTES_PER_PIXEL, PixelBuffer, PixelBufferData, PixelBufferError, row_size_in_bytes,
};
use crate::core::data::point::Point;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// The image a render writes into.
///
/// Every row sits behind its own lock so row tasks never contend with each
/// other, and a reader always sees either the old or the new contents of a
/// row. The in-flight flag allows at most one render per target.
#[derive(Debug)]
pub struct RenderTarget {
    size: u32,
    rows: Vec<Mutex<PixelBufferData>>,
    in_flight: AtomicBool,
}

impl RenderTarget {
    pub fn new(size: u32) -> Result<Self, PixelBufferError> {
        if size == 0 {
            return Err(PixelBufferError::ZeroSize);
        }

        let rows = (0..size)
            .map(|_| Mutex::new(vec![0; row_size_in_bytes(size)]))
            .collect();

        Ok(Self {
            size,
            rows,
            in_flight: AtomicBool::new(false),
        })
    }

    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[must_use]
    pub fn is_rendering(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Claims the target for a render. Returns `false` if one is already in flight.
    pub(crate) fn try_begin(&self) -> bool {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub(crate) fn finish(&self) {
        self.in_flight.store(false, Ordering::Release);
    }

    pub fn write_row(&self, y: u32, colours: &[Colour]) -> Result<(), PixelBufferError> {
        if colours.len() != self.size as usize {
            return Err(PixelBufferError::RowLengthMismatch {
                expected: self.size as usize,
                actual: colours.len(),
            });
        }

        let mut row = self.lock_row(y)?;

        for (dst, colour) in row.chunks_exact_mut(BYTES_PER_PIXEL).zip(colours) {
            dst[0] = colour.r;
            dst[1] = colour.g;
            dst[2] = colour.b;
        }

        Ok(())
    }

    pub fn row(&self, y: u32) -> Result<PixelBufferData, PixelBufferError> {
        Ok(self.lock_row(y)?.clone())
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        if pixel.x >= self.size {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                size: self.size,
            });
        }

        let row = self.lock_row(pixel.y).map_err(|_| PixelBufferError::PixelOutsideBounds {
            pixel,
            size: self.size,
        })?;
        let index = pixel.x as usize * BYTES_PER_PIXEL;

        Ok(Colour {
            r: row[index],
            g: row[index + 1],
            b: row[index + 2],
        })
    }

    /// Overwrites every pixel. Intended for clearing between renders.
    pub fn fill(&self, colour: Colour) {
        for row in &self.rows {
            let mut row = row.lock().unwrap_or_else(PoisonError::into_inner);
            for dst in row.chunks_exact_mut(BYTES_PER_PIXEL) {
                dst[0] = colour.r;
                dst[1] = colour.g;
                dst[2] = colour.b;
            }
        }
    }

    /// Copies the current contents into an owned buffer. Rows still being
    /// computed keep whatever they held before.
    #[must_use]
    pub fn snapshot(&self) -> PixelBuffer {
        let mut data = Vec::with_capacity(row_size_in_bytes(self.size) * self.size as usize);

        for row in &self.rows {
            data.extend_from_slice(&row.lock().unwrap_or_else(PoisonError::into_inner));
        }

        PixelBuffer::from_data(self.size, data)
            .expect("rows always hold size * 3 bytes")
    }

    fn lock_row(&self, y: u32) -> Result<MutexGuard<'_, PixelBufferData>, PixelBufferError> {
        self.rows
            .get(y as usize)
            .map(|row| row.lock().unwrap_or_else(PoisonError::into_inner))
            .ok_or(PixelBufferError::RowOutsideBounds { y, size: self.size })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_size() {
        assert_eq!(RenderTarget::new(0).unwrap_err(), PixelBufferError::ZeroSize);
    }

    #[test]
    fn test_write_row_is_visible_in_snapshot() {
        let target = RenderTarget::new(2).unwrap();
        let red = Colour { r: 255, g: 0, b: 0 };
        let green = Colour { r: 0, g: 255, b: 0 };

        target.write_row(1, &[red, green]).unwrap();

        let snapshot = target.snapshot();
        assert_eq!(snapshot.buffer(), &vec![0, 0, 0, 0, 0, 0, 255, 0, 0, 0, 255, 0]);
        assert_eq!(target.pixel(Point { x: 1, y: 1 }).unwrap(), green);
    }

    #[test]
    fn test_write_row_rejects_wrong_length() {
        let target = RenderTarget::new(3).unwrap();

        assert_eq!(
            target.write_row(0, &[Colour::BLACK]),
            Err(PixelBufferError::RowLengthMismatch {
                expected: 3,
                actual: 1
            })
        );
    }

    #[test]
    fn test_write_row_rejects_row_outside_bounds() {
        let target = RenderTarget::new(2).unwrap();

        assert_eq!(
            target.write_row(2, &[Colour::BLACK, Colour::BLACK]),
            Err(PixelBufferError::RowOutsideBounds { y: 2, size: 2 })
        );
    }

    #[test]
    fn test_pixel_outside_bounds() {
        let target = RenderTarget::new(2).unwrap();

        assert!(target.pixel(Point { x: 2, y: 0 }).is_err());
        assert!(target.pixel(Point { x: 0, y: 2 }).is_err());
    }

    #[test]
    fn test_fill_overwrites_every_row() {
        let target = RenderTarget::new(4).unwrap();
        let grey = Colour { r: 7, g: 7, b: 7 };

        target.fill(grey);

        for y in 0..4 {
            assert!(target.row(y).unwrap().iter().all(|&b| b == 7));
        }
    }

    #[test]
    fn test_in_flight_flag_is_exclusive() {
        let target = RenderTarget::new(2).unwrap();

        assert!(!target.is_rendering());
        assert!(target.try_begin());
        assert!(target.is_rendering());
        assert!(!target.try_begin());

        target.finish();

        assert!(!target.is_rendering());
        assert!(target.try_begin());
    }
}
