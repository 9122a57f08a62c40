mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use controllers::benchmark::errors::BenchmarkError;
pub use controllers::benchmark::report::BenchmarkReport;
pub use controllers::benchmark::result::BenchmarkResult;
pub use controllers::benchmark::settings::BenchmarkSettings;
pub use controllers::interactive::ZoomController;
pub use controllers::interactive::events::render::RenderEvent;
pub use controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
pub use controllers::interactive::session::ExplorerSession;
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::compute::bulk_parallel::BulkParallelBackend;
pub use crate::core::compute::devices::rayon_device::{RAYON_DEVICE_ID, RayonDevice};
pub use crate::core::compute::errors::{ComputeFailure, DeviceError};
pub use crate::core::compute::ports::compute_device::ComputeDevice;
pub use crate::core::compute::sequential::SequentialBackend;
pub use crate::core::compute::settings::ComputeSettings;
pub use crate::core::compute::{BackendKind, Backends, ComputeBackend};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame_size::FrameSize;
pub use crate::core::data::frame_surface::FrameSurface;
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::zoom::settings::ZoomSettings;
pub use presenters::file::ppm::PpmFilePresenter;
pub use presenters::headless::presenter::HeadlessPresenter;

#[cfg(feature = "gui")]
pub use input::gui::run_gui;
