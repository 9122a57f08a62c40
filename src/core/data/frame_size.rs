use crate::core::data::point::Point;

/// Pixel dimensions of a frame. Zero-sized frames are representable so that
/// compute backends can reject them explicitly.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct FrameSize {
    width: u32,
    height: u32,
}

impl FrameSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as i64) < i64::from(self.width)
            && (point.y as i64) < i64::from(self.height)
    }
}
