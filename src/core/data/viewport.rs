use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

pub const DEFAULT_CENTER: Complex = Complex::new(0.0, 0.0);
pub const DEFAULT_HALF_EXTENT: f64 = 2.0;
pub const DEFAULT_DEPTH: u32 = 360;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewportError {
    NonFiniteCenter(Complex),
    InvalidHalfWidth(f64),
    InvalidHalfHeight(f64),
    ZeroDepth,
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteCenter(center) => write!(
                f,
                "viewport center ({}, {}) is not finite",
                center.real, center.imag
            ),
            Self::InvalidHalfWidth(value) => {
                write!(f, "half width must be finite and positive, got {}", value)
            }
            Self::InvalidHalfHeight(value) => {
                write!(f, "half height must be finite and positive, got {}", value)
            }
            Self::ZeroDepth => write!(f, "iteration depth must be at least 1"),
        }
    }
}

impl Error for ViewportError {}

/// Region of the complex plane mapped onto the frame, plus the iteration cap.
///
/// The half extents are used with a 2x field of view: a frame `width` pixels
/// wide spans `2 * half_width` units starting at `center.real - half_width`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center: Complex,
    half_width: f64,
    half_height: f64,
    depth: u32,
}

fn valid_extent(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl Viewport {
    pub fn new(
        center: Complex,
        half_width: f64,
        half_height: f64,
        depth: u32,
    ) -> Result<Self, ViewportError> {
        if !center.is_finite() {
            return Err(ViewportError::NonFiniteCenter(center));
        }
        if !valid_extent(half_width) {
            return Err(ViewportError::InvalidHalfWidth(half_width));
        }
        if !valid_extent(half_height) {
            return Err(ViewportError::InvalidHalfHeight(half_height));
        }
        if depth == 0 {
            return Err(ViewportError::ZeroDepth);
        }

        Ok(Self {
            center,
            half_width,
            half_height,
            depth,
        })
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    #[must_use]
    pub fn half_height(&self) -> f64 {
        self.half_height
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Complex point under pixel `(col, row)` of a `width x height` frame.
    ///
    /// No bounds check; callers iterate over a known frame.
    #[inline]
    #[must_use]
    pub fn point_at(&self, col: u32, row: u32, width: u32, height: u32) -> Complex {
        let real = self.center.real - self.half_width
            + f64::from(col) * ((self.half_width * 2.0) / f64::from(width));
        let imag = self.center.imag - self.half_height
            + f64::from(row) * ((self.half_height * 2.0) / f64::from(height));

        Complex { real, imag }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            half_width: DEFAULT_HALF_EXTENT,
            half_height: DEFAULT_HALF_EXTENT,
            depth: DEFAULT_DEPTH,
        }
    }
}
