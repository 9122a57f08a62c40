use crate::core::data::complex::Complex;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// The point an animated zoom is heading for and how many ticks remain.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZoomTarget {
    pub target: Complex,
    pub direction: ZoomDirection,
    pub remaining_steps: u32,
}
