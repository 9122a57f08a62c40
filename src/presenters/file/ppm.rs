use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes frames as binary (P6) PPM images.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn write_to(&self, buffer: &PixelBuffer, mut out: impl Write) -> std::io::Result<()> {
        let size = buffer.size();

        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(out, "P6")?;
        writeln!(out, "{} {}", size.width(), size.height())?;
        writeln!(out, "255")?;
        out.write_all(&buffer.to_rgb_bytes())?;
        out.flush()
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let file = std::fs::File::create(filepath)?;
        self.write_to(buffer, BufWriter::new(file))
    }
}
