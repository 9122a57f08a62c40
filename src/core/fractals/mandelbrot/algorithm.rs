use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::{PixelToComplexCoordsError, pixel_to_complex_coords};

/// Number of completed iterations of `z -> z^2 + c` (from `z = 0`) before `|z|`
/// leaves the radius 2 disk, capped at `max_depth`.
///
/// A point whose first iterate already lies outside the disk returns 0.
/// Landing exactly on the boundary (`|z|^2 == 4`) does not count as escaping.
#[inline]
#[must_use]
pub fn escape_time(cx: f64, cy: f64, max_depth: u32) -> u32 {
    let mut x = 0.0_f64;
    let mut y = 0.0_f64;
    let mut xx = 0.0_f64;
    let mut yy = 0.0_f64;
    let mut count = 0;

    while count < max_depth {
        // both parts come from the pre-update x, y
        let x_next = xx - yy + cx;
        y = 2.0 * x * y + cy;
        x = x_next;

        xx = x * x;
        yy = y * y;
        if xx + yy > 4.0 {
            break;
        }

        count += 1;
    }

    count
}

#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
    size: FrameSize,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport, size: FrameSize) -> Self {
        Self { viewport, size }
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, self.size, &self.viewport)?;

        Ok(escape_time(c.real, c.imag, self.viewport.depth()))
    }
}
