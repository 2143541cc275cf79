use crate::core::data::complex::Complex;
use crate::core::data::viewport::{Viewport, ViewportError};

/// Outcome of iterating a single point.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IterationResult {
    /// `|z|²` exceeded the escape threshold at this step (counted from 1).
    Escaped(u32),
    /// The iteration cap was reached without escaping.
    Bounded,
}

impl IterationResult {
    /// The escape step, or -1 for points that never escaped.
    #[must_use]
    pub fn to_raw(self) -> i64 {
        match self {
            Self::Escaped(iterations) => i64::from(iterations),
            Self::Bounded => -1,
        }
    }
}

pub trait FractalAlgorithm: Send + Sync {
    fn initial_range(&self) -> Viewport;

    fn iterate(&self, c: Complex) -> IterationResult;

    fn recenter_and_zoom(
        &self,
        viewport: Viewport,
        center: Complex,
        scale: f64,
    ) -> Result<Viewport, ViewportError> {
        viewport.recenter_and_zoom(center, scale)
    }
}
