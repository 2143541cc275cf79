use crate::core::actions::render::ports::fractal_algorithm::{FractalAlgorithm, IterationResult};
use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::errors::AlgorithmError;
use crate::core::fractals::escape_time::{DEFAULT_MAX_ITERATIONS, escape_time};

/// The Mandelbar set: `z ← conj(z)² + c`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TricornAlgorithm {
    max_iterations: u32,
}

impl TricornAlgorithm {
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
        z.conjugate().square()
    }
}

impl Default for TricornAlgorithm {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl FractalAlgorithm for TricornAlgorithm {
    fn initial_range(&self) -> Viewport {
        Viewport::new(-2.0, -2.0, 4.0, 4.0).expect("tricorn initial range is valid")
    }

    fn iterate(&self, c: Complex) -> IterationResult {
        escape_time(c, self.max_iterations, Self::step)
    }
}
