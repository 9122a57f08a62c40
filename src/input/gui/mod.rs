//! GUI input adapter for interactive exploration.
//!
//! winit owns the window and the event loop, pixels presents the shared
//! frame surface. Readouts (mode, pointer coordinates, last render time)
//! go to the window title.

mod app;
pub mod events;

pub use app::run_gui;
