use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, EscapeCount};
use crate::core::compute::errors::ComputeFailure;
use crate::core::compute::{BackendKind, ComputeBackend};
use crate::core::data::frame_surface::{DirtyRect, FrameSurface};
use crate::core::data::viewport::Viewport;
use log::warn;
use std::error::Error;
use std::fmt;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStats {
    pub backend: BackendKind,
    pub elapsed: Duration,
    pub pixel_count: usize,
}

#[derive(Debug)]
pub enum RenderFrameError {
    Compute {
        backend: BackendKind,
        failure: ComputeFailure,
    },
    PixelBuffer(GeneratePixelBufferError),
}

impl fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compute { backend, failure } => {
                write!(f, "{} computation failed: {}", backend.label(), failure)
            }
            Self::PixelBuffer(err) => write!(f, "writing frame failed: {}", err),
        }
    }
}

impl Error for RenderFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Compute { failure, .. } => Some(failure),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

/// Computes `viewport` with `backend`, colours it and writes it to `surface`.
///
/// The surface is only locked for the write and is left untouched when the
/// backend fails. A successful call marks the whole frame dirty.
pub fn render_frame<CMap>(
    viewport: Viewport,
    backend: &dyn ComputeBackend,
    surface: &FrameSurface,
    colour_map: &CMap,
) -> Result<RenderStats, RenderFrameError>
where
    CMap: ColourMap<EscapeCount> + ?Sized,
{
    let kind = backend.kind();
    let start = Instant::now();
    let size = surface.size();

    let iterations = backend.compute_frame(viewport, size).map_err(|failure| {
        warn!(
            "{} computation failed, frame skipped: {}",
            kind.label(),
            failure
        );
        RenderFrameError::Compute {
            backend: kind,
            failure,
        }
    })?;

    {
        let mut lock = surface.lock();
        generate_pixel_buffer(&iterations, colour_map, lock.buffer_mut()).map_err(|err| {
            warn!("{} frame could not be written: {}", kind.label(), err);
            RenderFrameError::PixelBuffer(err)
        })?;
        lock.add_dirty_rect(DirtyRect::full(size));
    }

    Ok(RenderStats {
        backend: kind,
        elapsed: start.elapsed(),
        pixel_count: size.pixel_count(),
    })
}
