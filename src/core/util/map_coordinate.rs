use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MapCoordinateError {
    ZeroSize,
    IndexOutOfRange { index: u32, size: u32 },
}

impl fmt::Display for MapCoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize => write!(f, "cannot map onto a dimension of size zero"),
            Self::IndexOutOfRange { index, size } => {
                write!(f, "index {} is outside the range [0, {})", index, size)
            }
        }
    }
}

impl Error for MapCoordinateError {}

/// Maps pixel `index` along a dimension of `size` pixels onto
/// `[range_min, range_max)`.
pub fn map_coordinate(
    range_min: f64,
    range_max: f64,
    size: u32,
    index: u32,
) -> Result<f64, MapCoordinateError> {
    if size == 0 {
        return Err(MapCoordinateError::ZeroSize);
    }

    if index >= size {
        return Err(MapCoordinateError::IndexOutOfRange { index, size });
    }

    let range = range_max - range_min;

    Ok(range_min + range * index as f64 / size as f64)
}

pub fn pixel_to_complex(
    pixel: Point,
    viewport: Viewport,
    size: u32,
) -> Result<Complex, MapCoordinateError> {
    let (x_min, x_max) = viewport.x_range();
    let (y_min, y_max) = viewport.y_range();

    Ok(Complex {
        real: map_coordinate(x_min, x_max, size, pixel.x)?,
        imag: map_coordinate(y_min, y_max, size, pixel.y)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_index_maps_to_range_min() {
        assert_eq!(map_coordinate(-2.0, 1.0, 400, 0), Ok(-2.0));
        assert_eq!(map_coordinate(5.0, 9.0, 1, 0), Ok(5.0));
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(map_coordinate(-2.0, 2.0, 4, 2), Ok(0.0));
        assert_eq!(map_coordinate(0.0, 10.0, 10, 3), Ok(3.0));
    }

    #[test]
    fn test_last_index_stops_short_of_range_max() {
        let last = map_coordinate(0.0, 1.0, 4, 3).unwrap();

        assert_eq!(last, 0.75);
        assert!(last < 1.0);
    }

    #[test]
    fn test_monotonic_in_index() {
        for size in [1_u32, 2, 3, 17, 400] {
            let values: Vec<f64> = (0..size)
                .map(|index| map_coordinate(-1.5, 0.5, size, index).unwrap())
                .collect();

            assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn test_zero_size_fails() {
        assert_eq!(map_coordinate(0.0, 1.0, 0, 0), Err(MapCoordinateError::ZeroSize));
    }

    #[test]
    fn test_index_out_of_range_fails() {
        assert_eq!(
            map_coordinate(0.0, 1.0, 10, 10),
            Err(MapCoordinateError::IndexOutOfRange { index: 10, size: 10 })
        );
    }

    #[test]
    fn test_pixel_to_complex_top_left() {
        let viewport = Viewport::new(-2.0, -1.0, 4.0, 2.0).unwrap();

        let result = pixel_to_complex(Point { x: 0, y: 0 }, viewport, 100);

        assert_eq!(result, Ok(Complex::new(-2.0, -1.0)));
    }

    #[test]
    fn test_pixel_to_complex_center() {
        let viewport = Viewport::new(-1.0, -1.0, 2.0, 2.0).unwrap();

        let result = pixel_to_complex(Point { x: 50, y: 50 }, viewport, 100);

        assert_eq!(result, Ok(Complex::ZERO));
    }

    #[test]
    fn test_pixel_outside_grid_fails() {
        let viewport = Viewport::new(-1.0, -1.0, 2.0, 2.0).unwrap();

        assert_eq!(
            pixel_to_complex(Point { x: 3, y: 150 }, viewport, 100),
            Err(MapCoordinateError::IndexOutOfRange { index: 150, size: 100 })
        );
    }
}
