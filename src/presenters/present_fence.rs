use std::sync::{Condvar, Mutex, PoisonError};
use std::time::Duration;

#[derive(Debug, Default)]
struct FenceState {
    submitted: u64,
    displayed: u64,
    closed: bool,
}

/// Counts frames handed to a presenter and the ones that reached the screen,
/// so the rendering side can wait for the display to catch up.
#[derive(Debug, Default)]
pub struct PresentFence {
    state: Mutex<FenceState>,
    displayed: Condvar,
}

impl PresentFence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one more frame written to the surface and returns its sequence number.
    pub fn submit(&self) -> u64 {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.submitted += 1;
        state.submitted
    }

    /// Sequence number of the newest submitted frame.
    #[must_use]
    pub fn submitted(&self) -> u64 {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .submitted
    }

    /// Marks every frame up to `sequence` as on screen.
    pub fn mark_displayed(&self, sequence: u64) {
        {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            state.displayed = state.displayed.max(sequence);
        }
        self.displayed.notify_all();
    }

    /// Releases current and future waiters; used when the display goes away.
    pub fn close(&self) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .closed = true;
        self.displayed.notify_all();
    }

    /// Waits until every frame submitted so far is displayed. Gives up when
    /// the fence is closed or `timeout` passes. Returns whether the frames
    /// were displayed.
    pub fn wait_displayed(&self, timeout: Duration) -> bool {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let target = state.submitted;

        let (state, _) = self
            .displayed
            .wait_timeout_while(state, timeout, |s| s.displayed < target && !s.closed)
            .unwrap_or_else(PoisonError::into_inner);

        state.displayed >= target
    }
}
