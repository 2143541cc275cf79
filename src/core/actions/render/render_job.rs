use crate::core::data::viewport::Viewport;
use crate::core::fractals::fractal::Fractal;

/// What to render. The viewport is a copy, so later navigation by the caller
/// cannot reach a render already in flight.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderJob {
    pub fractal: Fractal,
    pub viewport: Viewport,
}

impl RenderJob {
    #[must_use]
    pub fn new(fractal: Fractal, viewport: Viewport) -> Self {
        Self { fractal, viewport }
    }
}
