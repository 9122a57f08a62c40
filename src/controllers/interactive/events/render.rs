use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::render::RenderError;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    Frame(FrameData),
    Error(RenderError),
    /// Human readable state change, e.g. a backend switch.
    Status(String),
}
