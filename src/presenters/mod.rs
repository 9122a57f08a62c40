pub mod file;
pub mod headless;
#[cfg(feature = "gui")]
pub mod pixels;
#[cfg(any(feature = "gui", test))]
pub mod present_fence;
