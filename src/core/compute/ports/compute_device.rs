use crate::core::compute::errors::DeviceError;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::iteration_buffer::IterationBuffer;
use crate::core::data::viewport::Viewport;

/// A massively parallel evaluator of the escape-time algorithm.
///
/// `select_device` must succeed before `compute_parallel` is dispatched. The
/// returned buffer is complete; devices never hand back partial results.
pub trait ComputeDevice: Send + Sync {
    fn select_device(&self, id: u32) -> Result<(), DeviceError>;

    fn compute_parallel(
        &self,
        size: FrameSize,
        viewport: &Viewport,
    ) -> Result<IterationBuffer, DeviceError>;
}
