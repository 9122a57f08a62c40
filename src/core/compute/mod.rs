//! Compute backends turning a viewport snapshot into per-pixel escape counts.
//!
//! Both backends run the same escape-time algorithm, so their iteration
//! buffers are identical for identical inputs. Only the execution strategy
//! differs.

pub mod bulk_parallel;
pub mod devices;
pub mod errors;
pub mod ports;
pub mod sequential;
pub mod settings;

use crate::core::compute::bulk_parallel::BulkParallelBackend;
use crate::core::compute::errors::ComputeFailure;
use crate::core::compute::sequential::SequentialBackend;
use crate::core::compute::settings::ComputeSettings;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::iteration_buffer::IterationBuffer;
use crate::core::data::viewport::Viewport;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum BackendKind {
    Sequential,
    #[default]
    BulkParallel,
}

impl BackendKind {
    /// Benchmark order: the baseline first.
    pub const ALL: [BackendKind; 2] = [BackendKind::Sequential, BackendKind::BulkParallel];

    /// Short label used in timing lines and the machine-readable report.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sequential => "CPU",
            Self::BulkParallel => "GPU",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Sequential => "CPU (sequential)",
            Self::BulkParallel => "GPU (parallel)",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Sequential => Self::BulkParallel,
            Self::BulkParallel => Self::Sequential,
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub trait ComputeBackend: Send + Sync {
    fn kind(&self) -> BackendKind;

    fn compute_frame(
        &self,
        viewport: Viewport,
        size: FrameSize,
    ) -> Result<IterationBuffer, ComputeFailure>;
}

/// One backend per [`BackendKind`].
pub struct Backends {
    sequential: Box<dyn ComputeBackend>,
    bulk_parallel: Box<dyn ComputeBackend>,
}

impl Backends {
    #[must_use]
    pub fn new(
        sequential: Box<dyn ComputeBackend>,
        bulk_parallel: Box<dyn ComputeBackend>,
    ) -> Self {
        Self {
            sequential,
            bulk_parallel,
        }
    }

    #[must_use]
    pub fn get(&self, kind: BackendKind) -> &dyn ComputeBackend {
        match kind {
            BackendKind::Sequential => self.sequential.as_ref(),
            BackendKind::BulkParallel => self.bulk_parallel.as_ref(),
        }
    }
}

impl Backends {
    /// The shipped backends, with the parallel one configured by `settings`.
    #[must_use]
    pub fn with_settings(settings: &ComputeSettings) -> Self {
        Self::new(
            Box::new(SequentialBackend),
            Box::new(BulkParallelBackend::with_settings(settings)),
        )
    }
}

impl Default for Backends {
    fn default() -> Self {
        Self::with_settings(&ComputeSettings::default())
    }
}
