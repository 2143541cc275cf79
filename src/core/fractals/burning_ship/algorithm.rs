use crate::core::actions::render::ports::fractal_algorithm::{FractalAlgorithm, IterationResult};
use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::errors::AlgorithmError;
use crate::core::fractals::escape_time::{DEFAULT_MAX_ITERATIONS, escape_time};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BurningShipAlgorithm {
    max_iterations: u32,
}

impl BurningShipAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, AlgorithmError> {
        if max_iterations == 0 {
            return Err(AlgorithmError::ZeroMaxIterations);
        }

        Ok(Self { max_iterations })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[inline]
    pub(crate) fn step(z: Complex) -> Complex {
        z.abs_components().square()
    }
}

impl Default for BurningShipAlgorithm {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl FractalAlgorithm for BurningShipAlgorithm {
    fn initial_range(&self) -> Viewport {
        Viewport::new(-2.0, -2.5, 4.0, 4.0).expect("burning ship initial range is valid")
    }

    fn iterate(&self, c: Complex) -> IterationResult {
        escape_time(c, self.max_iterations, Self::step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_max_iterations_rejected() {
        assert_eq!(
            BurningShipAlgorithm::new(0),
            Err(AlgorithmError::ZeroMaxIterations)
        );
    }

    #[test]
    fn test_interior_points_are_bounded() {
        let algorithm = BurningShipAlgorithm::default();

        assert_eq!(algorithm.iterate(Complex::ZERO), IterationResult::Bounded);
        assert_eq!(
            algorithm.iterate(Complex::new(-1.0, 0.0)),
            IterationResult::Bounded
        );
    }

    #[test]
    fn test_far_point_escapes_immediately() {
        let algorithm = BurningShipAlgorithm::default();

        assert_eq!(
            algorithm.iterate(Complex::new(10.0, 10.0)),
            IterationResult::Escaped(1)
        );
    }

    #[test]
    fn test_real_axis_escape_count() {
        let algorithm = BurningShipAlgorithm::default();

        assert_eq!(
            algorithm.iterate(Complex::new(1.0, 0.0)),
            IterationResult::Escaped(3)
        );
    }

    #[test]
    fn test_step_folds_components_before_squaring() {
        assert_eq!(
            BurningShipAlgorithm::step(Complex::new(1.0, -2.0)),
            Complex::new(-3.0, 4.0)
        );
        assert_eq!(
            BurningShipAlgorithm::step(Complex::new(-1.0, 2.0)),
            Complex::new(-3.0, 4.0)
        );
    }

    #[test]
    fn test_small_cap_reports_bounded() {
        let algorithm = BurningShipAlgorithm::new(2).unwrap();

        assert_eq!(
            algorithm.iterate(Complex::new(1.0, 0.0)),
            IterationResult::Bounded
        );
    }
}
