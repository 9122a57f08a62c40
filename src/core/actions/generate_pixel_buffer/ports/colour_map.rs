use crate::core::data::colour::Colour;
use std::error::Error;

/// Escape count of one pixel together with the depth it was computed at.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EscapeCount {
    pub iterations: u32,
    pub max_depth: u32,
}

pub trait ColourMap<T>: Send + Sync {
    fn map(&self, value: T) -> Result<Colour, Box<dyn Error>>;

    fn display_name(&self) -> &str;
}
