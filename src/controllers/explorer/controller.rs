use crate::controllers::explorer::config::ExplorerConfig;
use crate::controllers::explorer::errors::ControllerError;
use crate::core::actions::render::handle::RenderHandle;
use crate::core::actions::render::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render::ports::render_event_sink::RenderEventSink;
use crate::core::actions::render::render_job::RenderJob;
use crate::core::actions::render::scheduler::RenderScheduler;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::data::render_target::RenderTarget;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::fractal::Fractal;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::util::map_coordinate::pixel_to_complex;
use log::{debug, info};
use std::sync::Arc;

/// Headless explorer: owns the current fractal and viewport and turns
/// selections, resets and clicks into renders.
///
/// State changes are committed only after the scheduler accepts the render
/// for them, so a rejected action leaves the explorer where it was.
pub struct ExplorerController {
    config: ExplorerConfig,
    scheduler: RenderScheduler,
    target: Arc<RenderTarget>,
    sink: Arc<dyn RenderEventSink>,
    fractal: Fractal,
    viewport: Viewport,
    last_render: Option<RenderHandle>,
}

impl ExplorerController {
    pub fn new(config: ExplorerConfig, sink: Arc<dyn RenderEventSink>) -> Result<Self, ControllerError> {
        let scheduler = RenderScheduler::new(config.threads)?;
        let target = Arc::new(RenderTarget::new(config.display_size)?);
        let fractal = Fractal::from(config.fractal);
        let viewport = fractal.initial_range();

        debug!(
            "explorer ready: {} at {}x{}, {} render threads",
            fractal.kind(),
            config.display_size,
            config.display_size,
            scheduler.thread_count()
        );

        Ok(Self {
            config,
            scheduler,
            target,
            sink,
            fractal,
            viewport,
            last_render: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    #[must_use]
    pub fn fractal(&self) -> FractalKinds {
        self.fractal.kind()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn is_rendering(&self) -> bool {
        self.target.is_rendering()
    }

    /// The most recently accepted render, if any.
    #[must_use]
    pub fn last_render(&self) -> Option<&RenderHandle> {
        self.last_render.as_ref()
    }

    /// Renders the current viewport.
    pub fn draw(&mut self) -> Result<RenderHandle, ControllerError> {
        self.start(self.fractal, self.viewport)
    }

    /// Switches to the fractal called `name`, resets to its initial range and
    /// draws. Unknown names change nothing.
    pub fn select_fractal(&mut self, name: &str) -> Result<RenderHandle, ControllerError> {
        let kind: FractalKinds = name.parse()?;
        self.select_kind(kind)
    }

    pub fn select_kind(&mut self, kind: FractalKinds) -> Result<RenderHandle, ControllerError> {
        let fractal = Fractal::from(kind);
        info!("selected {}", kind);
        self.start(fractal, fractal.initial_range())
    }

    /// Restores the current fractal's initial range and draws.
    pub fn reset(&mut self) -> Result<RenderHandle, ControllerError> {
        self.start(self.fractal, self.fractal.initial_range())
    }

    /// Recenters on the clicked pixel, zooms by the configured factor and
    /// draws. Ignored with [`ControllerError::Busy`] while rows of the previous
    /// render are outstanding.
    pub fn click(&mut self, x: u32, y: u32) -> Result<RenderHandle, ControllerError> {
        if self.target.is_rendering() {
            return Err(ControllerError::Busy);
        }

        let center = pixel_to_complex(Point { x, y }, self.viewport, self.config.display_size)?;
        let viewport = self
            .fractal
            .recenter_and_zoom(self.viewport, center, self.config.zoom_factor)?;

        debug!("click at ({}, {}) -> center {:?}", x, y, center);

        self.start(self.fractal, viewport)
    }

    /// Blocks until the last accepted render has finished.
    pub fn wait(&self) -> Result<(), ControllerError> {
        if let Some(handle) = &self.last_render {
            handle.wait()?;
        }

        Ok(())
    }

    /// Copy of the image as it stands, complete or not.
    #[must_use]
    pub fn snapshot(&self) -> PixelBuffer {
        self.target.snapshot()
    }

    fn start(&mut self, fractal: Fractal, viewport: Viewport) -> Result<RenderHandle, ControllerError> {
        let handle = self.scheduler.render(
            RenderJob::new(fractal, viewport),
            Arc::clone(&self.target),
            Arc::clone(&self.sink),
        )?;

        self.fractal = fractal;
        self.viewport = viewport;
        self.last_render = Some(handle.clone());

        Ok(handle)
    }
}
