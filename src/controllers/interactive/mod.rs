//! Interactive exploration: the session state, the background zoom
//! controller and the port frames are presented through.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: pixel-space selections, wheel and drag deltas, key toggles
//! - **Output**: `InteractiveControllerPresenterPort` receiving `RenderEvent`s
//! - **Core**: viewport, zoom and render actions from `core/`

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;
pub mod session;

pub use controller::ZoomController;
