use crate::core::actions::render::ports::colour_map::ColourMap;
use crate::core::actions::render::ports::fractal_algorithm::IterationResult;
use crate::core::data::colour::Colour;

const BASE_HUE: f64 = 0.7;
const ITERATIONS_PER_HUE_CYCLE: f64 = 200.0;

/// Walks round the colour wheel as the escape count grows, starting from
/// violet. Points that never escape are black.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct HueCycleColourMap;

impl HueCycleColourMap {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn hue(iterations: u32) -> f64 {
        BASE_HUE + f64::from(iterations) / ITERATIONS_PER_HUE_CYCLE
    }
}

impl ColourMap<IterationResult> for HueCycleColourMap {
    fn map(&self, value: IterationResult) -> Colour {
        match value {
            IterationResult::Escaped(iterations) => Colour::from_hsb(Self::hue(iterations), 1.0, 1.0),
            IterationResult::Bounded => Colour::BLACK,
        }
    }

    fn display_name(&self) -> &str {
        "Hue cycle"
    }
}
