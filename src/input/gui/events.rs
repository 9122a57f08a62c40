/// Custom user events for the GUI event loop.
///
/// These events allow background threads (the zoom controller and the
/// benchmark) to wake the main UI thread.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// Signals that the presenter adapter holds new render events.
    ///
    /// Note: Receiving this event does NOT automatically trigger a redraw.
    /// The handler requests one only when a frame was actually written.
    Wake,
}
