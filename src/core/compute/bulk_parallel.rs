use crate::core::compute::devices::rayon_device::RayonDevice;
use crate::core::compute::errors::{ComputeFailure, DeviceError};
use crate::core::compute::ports::compute_device::ComputeDevice;
use crate::core::compute::settings::ComputeSettings;
use crate::core::compute::{BackendKind, ComputeBackend};
use crate::core::data::frame_size::FrameSize;
use crate::core::data::iteration_buffer::IterationBuffer;
use crate::core::data::viewport::Viewport;
use std::sync::Arc;

/// Offloads the whole frame to a [`ComputeDevice`].
pub struct BulkParallelBackend {
    device: Arc<dyn ComputeDevice>,
    device_id: u32,
}

impl BulkParallelBackend {
    #[must_use]
    pub fn new(device: Arc<dyn ComputeDevice>, device_id: u32) -> Self {
        Self { device, device_id }
    }

    /// Backend on a [`RayonDevice`] sized by `settings`.
    #[must_use]
    pub fn with_settings(settings: &ComputeSettings) -> Self {
        Self::new(Arc::new(RayonDevice::new(settings.threads)), settings.device_id)
    }
}

impl Default for BulkParallelBackend {
    fn default() -> Self {
        Self::with_settings(&ComputeSettings::default())
    }
}

impl ComputeBackend for BulkParallelBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::BulkParallel
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

        self.device
            .select_device(self.device_id)
            .map_err(ComputeFailure::DeviceUnavailable)?;

        let buffer = self
            .device
            .compute_parallel(size, &viewport)
            .map_err(ComputeFailure::DispatchError)?;

        if buffer.size() != size {
            return Err(ComputeFailure::DispatchError(DeviceError::Dispatch(format!(
                "device returned a {}x{} buffer for a {}x{} frame",
                buffer.size().width(),
                buffer.size().height(),
                size.width(),
                size.height()
            ))));
        }

        Ok(buffer)
    }
}
