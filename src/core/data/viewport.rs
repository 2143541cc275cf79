use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidSize { width: f64, height: f64 },
    NonFinite,
    InvalidScale { scale: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "viewport size must be positive: {}x{}", width, height)
            }
            Self::NonFinite => write!(f, "viewport coordinates must be finite"),
            Self::InvalidScale { scale } => {
                write!(f, "zoom scale must be positive and finite: {}", scale)
            }
        }
    }
}

impl Error for ViewportError {}

/// The rectangle of the complex plane currently mapped onto the pixel grid.
///
/// Values are immutable: zooming produces a new viewport so a render that
/// holds a copy is never affected by later navigation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    origin_x: f64,
    origin_y: f64,
    width: f64,
    height: f64,
}

impl Viewport {
    pub fn new(origin_x: f64, origin_y: f64, width: f64, height: f64) -> Result<Self, ViewportError> {
        if !(origin_x.is_finite() && origin_y.is_finite() && width.is_finite() && height.is_finite()) {
            return Err(ViewportError::NonFinite);
        }

        if width <= 0.0 || height <= 0.0 {
            return Err(ViewportError::InvalidSize { width, height });
        }

        Ok(Self {
            origin_x,
            origin_y,
            width,
            height,
        })
    }

    #[must_use]
    pub fn origin_x(&self) -> f64 {
        self.origin_x
    }

    #[must_use]
    pub fn origin_y(&self) -> f64 {
        self.origin_y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn x_range(&self) -> (f64, f64) {
        (self.origin_x, self.origin_x + self.width)
    }

    #[must_use]
    pub fn y_range(&self) -> (f64, f64) {
        (self.origin_y, self.origin_y + self.height)
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: self.origin_x + self.width / 2.0,
            imag: self.origin_y + self.height / 2.0,
        }
    }

    /// Scales the extent by `scale` and moves the origin so that `center`
    /// sits in the middle of the result.
    pub fn recenter_and_zoom(&self, center: Complex, scale: f64) -> Result<Self, ViewportError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ViewportError::InvalidScale { scale });
        }

        let width = self.width * scale;
        let height = self.height * scale;

        Self::new(
            center.real - width / 2.0,
            center.imag - height / 2.0,
            width,
            height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let viewport = Viewport::new(-2.0, -1.5, 3.0, 3.0).unwrap();

        assert_eq!(viewport.origin_x(), -2.0);
        assert_eq!(viewport.origin_y(), -1.5);
        assert_eq!(viewport.x_range(), (-2.0, 1.0));
        assert_eq!(viewport.y_range(), (-1.5, 1.5));
    }

    #[test]
    fn test_dimensions_must_be_positive() {
        assert_eq!(
            Viewport::new(0.0, 0.0, 0.0, 1.0),
            Err(ViewportError::InvalidSize {
                width: 0.0,
                height: 1.0
            })
        );
        assert_eq!(
            Viewport::new(0.0, 0.0, 1.0, -2.0),
            Err(ViewportError::InvalidSize {
                width: 1.0,
                height: -2.0
            })
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        assert_eq!(
            Viewport::new(f64::NAN, 0.0, 1.0, 1.0),
            Err(ViewportError::NonFinite)
        );
        assert_eq!(
            Viewport::new(0.0, 0.0, f64::INFINITY, 1.0),
            Err(ViewportError::NonFinite)
        );
    }

    #[test]
    fn test_recenter_and_zoom_halves_and_centers() {
        let viewport = Viewport::new(-2.0, -2.0, 4.0, 4.0).unwrap();

        let zoomed = viewport.recenter_and_zoom(Complex::ZERO, 0.5).unwrap();

        assert_eq!(zoomed, Viewport::new(-1.0, -1.0, 2.0, 2.0).unwrap());
    }

    #[test]
    fn test_recenter_and_zoom_moves_center() {
        let viewport = Viewport::new(-2.0, -2.0, 4.0, 4.0).unwrap();

        let zoomed = viewport
            .recenter_and_zoom(Complex::new(1.0, -0.5), 0.5)
            .unwrap();

        assert_eq!(zoomed.center(), Complex::new(1.0, -0.5));
        assert_eq!(zoomed.width(), 2.0);
        assert_eq!(zoomed.height(), 2.0);
    }

    #[test]
    fn test_recenter_and_zoom_out() {
        let viewport = Viewport::new(-1.0, -1.0, 2.0, 2.0).unwrap();

        let zoomed = viewport.recenter_and_zoom(Complex::ZERO, 2.0).unwrap();

        assert_eq!(zoomed, Viewport::new(-2.0, -2.0, 4.0, 4.0).unwrap());
    }

    #[test]
    fn test_recenter_and_zoom_rejects_bad_scale() {
        let viewport = Viewport::new(-1.0, -1.0, 2.0, 2.0).unwrap();

        assert_eq!(
            viewport.recenter_and_zoom(Complex::ZERO, 0.0),
            Err(ViewportError::InvalidScale { scale: 0.0 })
        );
        assert!(viewport.recenter_and_zoom(Complex::ZERO, f64::NAN).is_err());
    }

    #[test]
    fn test_recenter_and_zoom_leaves_original_untouched() {
        let viewport = Viewport::new(-2.0, -2.0, 4.0, 4.0).unwrap();
        let _ = viewport.recenter_and_zoom(Complex::new(1.0, 1.0), 0.5).unwrap();

        assert_eq!(viewport, Viewport::new(-2.0, -2.0, 4.0, 4.0).unwrap());
    }
}
