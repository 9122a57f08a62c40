use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::input::gui::events::GuiEvent;
use crate::presenters::present_fence::PresentFence;
use log::debug;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use winit::event_loop::EventLoopProxy;

/// Longest a sync waits for the window before rendering carries on.
const SYNC_TIMEOUT: Duration = Duration::from_millis(250);

/// Render events received since the UI thread last looked.
#[derive(Debug, Default)]
pub struct PendingUpdate {
    pub frame: Option<FrameData>,
    pub error: Option<RenderError>,
    pub status: Option<String>,
}

impl PendingUpdate {
    fn record(&mut self, event: RenderEvent) {
        match event {
            RenderEvent::Frame(frame) => {
                self.error = None;
                self.frame = Some(frame);
            }
            RenderEvent::Error(error) => self.error = Some(error),
            RenderEvent::Status(status) => self.status = Some(status),
        }
    }
}

/// Controller-side half of the pixels presenter. Collects render events from
/// any thread and wakes the event loop.
pub struct PixelsAdapter {
    pending: Mutex<PendingUpdate>,
    fence: PresentFence,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl InteractiveControllerPresenterPort for PixelsAdapter {
    fn present(&self, event: RenderEvent) {
        let is_frame = matches!(event, RenderEvent::Frame(_));
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record(event);
        if is_frame {
            self.fence.submit();
        }
        self.wake();
    }

    fn sync(&self) {
        self.wake();
        if !self.fence.wait_displayed(SYNC_TIMEOUT) {
            debug!("window did not present the frame in time");
        }
    }
}

impl PixelsAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            pending: Mutex::new(PendingUpdate::default()),
            fence: PresentFence::new(),
            event_loop_proxy,
        }
    }

    /// Newest frame the surface is known to hold.
    pub fn frames_submitted(&self) -> u64 {
        self.fence.submitted()
    }

    /// Called by the UI thread once frames up to `sequence` are on screen.
    pub fn mark_displayed(&self, sequence: u64) {
        self.fence.mark_displayed(sequence);
    }

    /// Stops sync from waiting on a window that is going away.
    pub fn close(&self) {
        self.fence.close();
    }

    pub fn take_update(&self) -> PendingUpdate {
        std::mem::take(&mut *self.pending.lock().unwrap_or_else(PoisonError::into_inner))
    }

    fn wake(&self) {
        // Fails only once the event loop is gone.
        let _ = self.event_loop_proxy.send_event(GuiEvent::Wake);
    }
}
