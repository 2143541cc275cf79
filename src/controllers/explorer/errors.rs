use crate::core::actions::render::errors::RenderError;
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::data::viewport::ViewportError;
use crate::core::fractals::errors::UnknownFractalError;
use crate::core::util::map_coordinate::MapCoordinateError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ControllerError {
    /// A click arrived while rows of the previous render were still pending.
    Busy,
    UnknownFractal(UnknownFractalError),
    Viewport(ViewportError),
    MapCoordinate(MapCoordinateError),
    Render(RenderError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Busy => write!(f, "a render is still in progress"),
            Self::UnknownFractal(err) => write!(f, "{}", err),
            Self::Viewport(err) => write!(f, "viewport error: {}", err),
            Self::MapCoordinate(err) => write!(f, "click outside the image: {}", err),
            Self::Render(err) => write!(f, "render error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Busy => None,
            Self::UnknownFractal(err) => Some(err),
            Self::Viewport(err) => Some(err),
            Self::MapCoordinate(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<UnknownFractalError> for ControllerError {
    fn from(err: UnknownFractalError) -> Self {
        Self::UnknownFractal(err)
    }
}

impl From<ViewportError> for ControllerError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<MapCoordinateError> for ControllerError {
    fn from(err: MapCoordinateError) -> Self {
        Self::MapCoordinate(err)
    }
}

impl From<RenderError> for ControllerError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}

impl From<PixelBufferError> for ControllerError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}
