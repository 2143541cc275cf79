use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use image::{ImageFormat, RgbImage};
use std::io;
use std::path::{Path, PathBuf};

/// Writes PNG files, adding a `.png` extension when the path lacks one.
#[derive(Debug, Default)]
pub struct PngFilePresenter {}

impl PngFilePresenter {
    pub fn new() -> Self {
        Self {}
    }

    fn with_png_extension(filepath: &Path) -> PathBuf {
        let has_png_extension = filepath
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));

        if has_png_extension {
            filepath.to_path_buf()
        } else {
            let mut name = filepath.as_os_str().to_owned();
            name.push(".png");
            PathBuf::from(name)
        }
    }
}

impl FilePresenterPort for PngFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> io::Result<PathBuf> {
        let path = Self::with_png_extension(filepath.as_ref());
        let size = buffer.size();

        let image = RgbImage::from_raw(size, size, buffer.buffer().clone()).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidData, "pixel buffer does not match its size")
        })?;

        image
            .save_with_format(&path, ImageFormat::Png)
            .map_err(io::Error::other)?;

        Ok(path)
    }
}
