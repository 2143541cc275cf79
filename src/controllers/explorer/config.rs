use crate::core::fractals::fractal_kinds::FractalKinds;

pub const DEFAULT_DISPLAY_SIZE: u32 = 400;
pub const DEFAULT_ZOOM_FACTOR: f64 = 0.5;

/// Settings for an [`ExplorerController`](super::controller::ExplorerController).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    /// Width and height of the square image, in pixels.
    pub display_size: u32,
    /// Factor applied to the viewport on every click. Below one zooms in.
    pub zoom_factor: f64,
    /// Render threads; `None` uses one per available core.
    pub threads: Option<usize>,
    pub fractal: FractalKinds,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            display_size: DEFAULT_DISPLAY_SIZE,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            threads: None,
            fractal: FractalKinds::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExplorerConfig::default();

        assert_eq!(config.display_size, 400);
        assert_eq!(config.zoom_factor, 0.5);
        assert_eq!(config.threads, None);
        assert_eq!(config.fractal, FractalKinds::Mandelbrot);
    }
}
