//! Viewport transitions for animated zooms, wheel zooms and panning.

pub mod settings;
pub mod state;
pub mod step;
pub mod target;
