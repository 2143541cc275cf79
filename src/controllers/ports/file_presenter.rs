use std::path::{Path, PathBuf};

use crate::core::data::pixel_buffer::PixelBuffer;

/// Persists a finished image. Returns the path actually written, which may
/// differ from the requested one (e.g. an added extension).
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<PathBuf>;
}
