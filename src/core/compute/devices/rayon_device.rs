use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::compute::errors::DeviceError;
use crate::core::compute::ports::compute_device::ComputeDevice;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::iteration_buffer::IterationBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use log::debug;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::{Arc, Mutex, PoisonError};

pub const RAYON_DEVICE_ID: u32 = 0;

/// Compute device backed by a dedicated rayon thread pool.
///
/// The pool is built on the first successful `select_device` call. A thread
/// count of 0 lets rayon pick one thread per core.
#[derive(Debug, Default)]
pub struct RayonDevice {
    threads: usize,
    pool: Mutex<Option<Arc<ThreadPool>>>,
}

impl RayonDevice {
    #[must_use]
    pub fn new(threads: usize) -> Self {
        Self {
            threads,
            pool: Mutex::new(None),
        }
    }

    fn selected_pool(&self) -> Option<Arc<ThreadPool>> {
        self.pool
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ComputeDevice for RayonDevice {
    fn select_device(&self, id: u32) -> Result<(), DeviceError> {
        if id != RAYON_DEVICE_ID {
            return Err(DeviceError::NoSuchDevice { id });
        }

        let mut pool = self.pool.lock().unwrap_or_else(PoisonError::into_inner);
        if pool.is_none() {
            let built = ThreadPoolBuilder::new()
                .num_threads(self.threads)
                .thread_name(|index| format!("rayon-device-{index}"))
                .build()
                .map_err(|e| DeviceError::InitFailed(e.to_string()))?;

            debug!(
                "rayon compute device ready with {} threads",
                built.current_num_threads()
            );
            *pool = Some(Arc::new(built));
        }

        Ok(())
    }

    fn compute_parallel(
        &self,
        size: FrameSize,
        viewport: &Viewport,
    ) -> Result<IterationBuffer, DeviceError> {
        let pool = self.selected_pool().ok_or(DeviceError::NotSelected)?;
        let algorithm = MandelbrotAlgorithm::new(*viewport, size);

        let counts = pool
            .install(|| generate_fractal_parallel_rayon(size, &algorithm))
            .map_err(|e| DeviceError::Dispatch(e.to_string()))?;

        IterationBuffer::new(size, viewport.depth(), counts)
            .map_err(|e| DeviceError::Dispatch(e.to_string()))
    }
}
