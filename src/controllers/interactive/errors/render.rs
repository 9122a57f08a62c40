use crate::core::compute::BackendKind;

/// A frame that was skipped; the surface still shows the previous one.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderError {
    pub generation: u64,
    pub backend: BackendKind,
    pub message: String,
}
