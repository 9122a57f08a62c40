use crate::core::data::point::Point;
use std::error::Error;

/// Per-pixel evaluation over a frame. Implementations must be pure so that
/// serial and parallel generation agree exactly.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
