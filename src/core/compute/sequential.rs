use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::compute::errors::{ComputeFailure, DeviceError};
use crate::core::compute::{BackendKind, ComputeBackend};
use crate::core::data::frame_size::FrameSize;
use crate::core::data::iteration_buffer::IterationBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

/// Evaluates one pixel after another on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialBackend;

impl ComputeBackend for SequentialBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Sequential
    }

    fn compute_frame(
        &self,
        viewport: Viewport,
        size: FrameSize,
    ) -> Result<IterationBuffer, ComputeFailure> {
        if size.is_degenerate() {
            return Err(ComputeFailure::DegenerateFrame {
                width: size.width(),
                height: size.height(),
            });
        }

        let algorithm = MandelbrotAlgorithm::new(viewport, size);
        let counts = generate_fractal(size, &algorithm)
            .map_err(|e| ComputeFailure::DispatchError(DeviceError::Dispatch(e.to_string())))?;

        IterationBuffer::new(size, viewport.depth(), counts)
            .map_err(|e| ComputeFailure::DispatchError(DeviceError::Dispatch(e.to_string())))
    }
}
