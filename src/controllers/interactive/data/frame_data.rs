use crate::core::compute::BackendKind;
use crate::core::data::frame_size::FrameSize;
use std::time::Duration;

/// A frame that has been written to the shared surface.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameData {
    pub generation: u64,
    pub backend: BackendKind,
    pub size: FrameSize,
    pub render_duration: Duration,
}
