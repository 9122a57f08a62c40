use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use log::debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

/// Presenter for runs without a window. Frames stay on the shared surface;
/// this only keeps track of what happened.
#[derive(Debug, Default)]
pub struct HeadlessPresenter {
    frames: AtomicU64,
    errors: AtomicU64,
    last_generation: AtomicU64,
    last_status: Mutex<Option<String>>,
}

impl HeadlessPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn frames_presented(&self) -> u64 {
        self.frames.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn errors_presented(&self) -> u64 {
        self.errors.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn last_generation(&self) -> u64 {
        self.last_generation.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn last_status(&self) -> Option<String> {
        self.last_status
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl InteractiveControllerPresenterPort for HeadlessPresenter {
    fn present(&self, event: RenderEvent) {
        match event {
            RenderEvent::Frame(frame) => {
                self.frames.fetch_add(1, Ordering::AcqRel);
                self.last_generation
                    .fetch_max(frame.generation, Ordering::AcqRel);
            }
            RenderEvent::Error(error) => {
                debug!("frame {} skipped: {}", error.generation, error.message);
                self.errors.fetch_add(1, Ordering::AcqRel);
                self.last_generation
                    .fetch_max(error.generation, Ordering::AcqRel);
            }
            RenderEvent::Status(status) => {
                *self
                    .last_status
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner) = Some(status);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::interactive::data::frame_data::FrameData;
    use crate::controllers::interactive::errors::render::RenderError;
    use crate::core::compute::BackendKind;
    use crate::core::data::frame_size::FrameSize;
    use std::time::Duration;

    #[test]
    fn test_counts_frames_and_errors() {
        let presenter = HeadlessPresenter::new();

        presenter.present(RenderEvent::Frame(FrameData {
            generation: 3,
            backend: BackendKind::Sequential,
            size: FrameSize::new(1, 1),
            render_duration: Duration::from_millis(2),
        }));
        presenter.present(RenderEvent::Error(RenderError {
            generation: 2,
            backend: BackendKind::BulkParallel,
            message: "device lost".to_string(),
        }));

        assert_eq!(presenter.frames_presented(), 1);
        assert_eq!(presenter.errors_presented(), 1);
        assert_eq!(presenter.last_generation(), 3);
    }

    #[test]
    fn test_keeps_latest_status() {
        let presenter = HeadlessPresenter::new();

        presenter.present(RenderEvent::Status("Mode: CPU (sequential)".to_string()));
        presenter.present(RenderEvent::Status("Speedup: 3.10x".to_string()));

        assert_eq!(presenter.last_status().as_deref(), Some("Speedup: 3.10x"));
    }
}
