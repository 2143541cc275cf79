mod controllers;
mod core;
mod presenters;

pub use crate::controllers::explorer::config::ExplorerConfig;
pub use crate::controllers::explorer::controller::ExplorerController;
pub use crate::controllers::explorer::errors::ControllerError;
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::render::errors::{RenderError, RowError};
pub use crate::core::actions::render::events::{RenderEvent, RenderSummary};
pub use crate::core::actions::render::handle::RenderHandle;
pub use crate::core::actions::render::ports::colour_map::ColourMap;
pub use crate::core::actions::render::ports::fractal_algorithm::{FractalAlgorithm, IterationResult};
pub use crate::core::actions::render::ports::render_event_sink::{IgnoreEvents, RenderEventSink};
pub use crate::core::actions::render::render_job::RenderJob;
pub use crate::core::actions::render::row::compute_row;
pub use crate::core::actions::render::scheduler::RenderScheduler;
pub use crate::core::colour_maps::hue_cycle::HueCycleColourMap;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::render_target::RenderTarget;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::burning_ship::algorithm::BurningShipAlgorithm;
pub use crate::core::fractals::errors::{AlgorithmError, UnknownFractalError};
pub use crate::core::fractals::escape_time::DEFAULT_MAX_ITERATIONS;
pub use crate::core::fractals::fractal::Fractal;
pub use crate::core::fractals::fractal_kinds::FractalKinds;
pub use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
pub use crate::core::fractals::tricorn::algorithm::TricornAlgorithm;
pub use crate::core::util::map_coordinate::{MapCoordinateError, map_coordinate, pixel_to_complex};
pub use crate::presenters::file::png::PngFilePresenter;
pub use crate::presenters::file::ppm::PpmFilePresenter;
pub use crate::presenters::log::progress::ProgressLogger;
