use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, EscapeCount};
use crate::core::data::iteration_buffer::IterationBuffer;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GeneratePixelBufferError {
    ColourMap(Box<dyn Error>),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => err.source(),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Colours every escape count and writes the result into `target`.
///
/// All colours are mapped before the first write, so on any error `target`
/// is left exactly as it was.
pub fn generate_pixel_buffer<CMap: ColourMap<EscapeCount> + ?Sized>(
    iterations: &IterationBuffer,
    mapper: &CMap,
    target: &mut PixelBuffer,
) -> Result<(), GeneratePixelBufferError> {
    if iterations.size() != target.size() {
        return Err(PixelBufferError::BoundsMismatch {
            frame_size: target.size().pixel_count(),
            buffer_size: iterations.size().pixel_count(),
        }
        .into());
    }

    let max_depth = iterations.max_depth();
    let colours = iterations
        .counts()
        .iter()
        .map(|&count| {
            mapper
                .map(EscapeCount {
                    iterations: count,
                    max_depth,
                })
                .map(|colour| colour.packed())
        })
        .collect::<Result<Vec<u32>, _>>()
        .map_err(GeneratePixelBufferError::ColourMap)?;

    let width = (target.size().width() as usize).max(1);
    for (row, source) in target.rows_mut().zip(colours.chunks_exact(width)) {
        row.copy_from_slice(source);
    }

    Ok(())
}
