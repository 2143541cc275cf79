use crate::core::actions::render::ports::fractal_algorithm::{FractalAlgorithm, IterationResult};
use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::burning_ship::algorithm::BurningShipAlgorithm;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::tricorn::algorithm::TricornAlgorithm;

/// A selected fractal, resolved once when a render is set up.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Fractal {
    Mandelbrot(MandelbrotAlgorithm),
    Tricorn(TricornAlgorithm),
    BurningShip(BurningShipAlgorithm),
}

impl Fractal {
    #[must_use]
    pub fn kind(&self) -> FractalKinds {
        match self {
            Self::Mandelbrot(_) => FractalKinds::Mandelbrot,
            Self::Tricorn(_) => FractalKinds::Tricorn,
            Self::BurningShip(_) => FractalKinds::BurningShip,
        }
    }
}

impl From<FractalKinds> for Fractal {
    fn from(kind: FractalKinds) -> Self {
        match kind {
            FractalKinds::Mandelbrot => Self::Mandelbrot(MandelbrotAlgorithm::default()),
            FractalKinds::Tricorn => Self::Tricorn(TricornAlgorithm::default()),
            FractalKinds::BurningShip => Self::BurningShip(BurningShipAlgorithm::default()),
        }
    }
}

impl FractalAlgorithm for Fractal {
    fn initial_range(&self) -> Viewport {
        match self {
            Self::Mandelbrot(algorithm) => algorithm.initial_range(),
            Self::Tricorn(algorithm) => algorithm.initial_range(),
            Self::BurningShip(algorithm) => algorithm.initial_range(),
        }
    }

    #[inline]
    fn iterate(&self, c: Complex) -> IterationResult {
        match self {
            Self::Mandelbrot(algorithm) => algorithm.iterate(c),
            Self::Tricorn(algorithm) => algorithm.iterate(c),
            Self::BurningShip(algorithm) => algorithm.iterate(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_kind_round_trip() {
        for &kind in FractalKinds::ALL {
            assert_eq!(Fractal::from(kind).kind(), kind);
        }
    }

    #[test]
    fn every_variant_keeps_origin_bounded() {
        for &kind in FractalKinds::ALL {
            let fractal = Fractal::from(kind);
            assert_eq!(fractal.iterate(Complex::ZERO), IterationResult::Bounded, "{kind}");
        }
    }

    #[test]
    fn every_variant_escapes_far_away() {
        for &kind in FractalKinds::ALL {
            let fractal = Fractal::from(kind);
            let result = fractal.iterate(Complex::new(10.0, 10.0));

            assert!(
                matches!(result, IterationResult::Escaped(n) if n <= 3),
                "{kind} gave {result:?}"
            );
        }
    }

    #[test]
    fn variants_disagree_off_the_real_axis() {
        // c = -0.5 + 0.9i: the first step is the same for all, the second
        // step diverges because each variant treats the sign of Im(z) differently
        let c = Complex::new(-0.5, 0.9);
        let results: Vec<IterationResult> = FractalKinds::ALL
            .iter()
            .map(|&kind| Fractal::from(kind).iterate(c))
            .collect();

        assert_ne!(results[0], results[1]);
    }

    #[test]
    fn initial_range_dispatches_to_variant() {
        assert_eq!(
            Fractal::from(FractalKinds::Tricorn).initial_range(),
            TricornAlgorithm::default().initial_range()
        );
        assert_eq!(
            Fractal::from(FractalKinds::BurningShip).initial_range(),
            BurningShipAlgorithm::default().initial_range()
        );
    }
}
