use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::util::map_coordinate::MapCoordinateError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum RowError {
    MapCoordinate(MapCoordinateError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MapCoordinate(err) => write!(f, "coordinate mapping error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for RowError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MapCoordinate(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<MapCoordinateError> for RowError {
    fn from(err: MapCoordinateError) -> Self {
        Self::MapCoordinate(err)
    }
}

impl From<PixelBufferError> for RowError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The target already has a render whose rows are not all finished.
    RenderInProgress,
    ThreadPool(String),
    Row { y: u32, source: RowError },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RenderInProgress => write!(f, "render in progress"),
            Self::ThreadPool(message) => write!(f, "failed to build render thread pool: {}", message),
            Self::Row { y, source } => write!(f, "row {} failed: {}", y, source),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Row { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<rayon::ThreadPoolBuildError> for RenderError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::ThreadPool(err.to_string())
    }
}
