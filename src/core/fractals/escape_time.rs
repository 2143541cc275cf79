use crate::core::actions::render::ports::fractal_algorithm::IterationResult;
use crate::core::data::complex::Complex;

pub const DEFAULT_MAX_ITERATIONS: u32 = 2000;
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Runs `z ← step(z) + c` from `z = 0` until `|z|²` exceeds the escape radius
/// or `max_iterations` steps have been taken.
#[inline]
pub fn escape_time<F>(c: Complex, max_iterations: u32, step: F) -> IterationResult
where
    F: Fn(Complex) -> Complex,
{
    let mut z = Complex::ZERO;

    for iteration in 1..=max_iterations {
        z = step(z) + c;

        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return IterationResult::Escaped(iteration);
        }
    }

    IterationResult::Bounded
}
