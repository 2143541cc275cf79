use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<PathBuf> {
        let path = filepath.as_ref().to_path_buf();
        let mut file = std::io::BufWriter::new(std::fs::File::create(&path)?);
        let size = buffer.size();

        // P6: binary RGB, then width, height and max channel value
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", size, size)?;
        writeln!(file, "255")?;
        file.write_all(buffer.buffer())?;
        file.flush()?;

        Ok(path)
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
