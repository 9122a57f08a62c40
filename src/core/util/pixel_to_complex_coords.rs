use crate::core::data::complex::Complex;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideFrame { point: Point, size: FrameSize },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideFrame { point, size } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} frame",
                    point.x,
                    point.y,
                    size.width(),
                    size.height()
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

pub fn pixel_to_complex_coords(
    pixel_position: Point,
    size: FrameSize,
    viewport: &Viewport,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !size.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideFrame {
            point: pixel_position,
            size,
        });
    }

    Ok(viewport.point_at(
        pixel_position.x as u32,
        pixel_position.y as u32,
        size.width(),
        size.height(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_to_complex_top_left() {
        let size = FrameSize::new(100, 100);

        let result = pixel_to_complex_coords(Point { x: 0, y: 0 }, size, &Viewport::default());

        assert_eq!(result.unwrap(), Complex::new(-2.0, -2.0));
    }

    #[test]
    fn test_pixel_to_complex_center() {
        let size = FrameSize::new(800, 600);
        let viewport = Viewport::new(Complex::new(-0.5, 0.25), 1.5, 1.0, 100).unwrap();

        let result = pixel_to_complex_coords(Point { x: 400, y: 300 }, size, &viewport).unwrap();

        assert!((result.real - -0.5).abs() < 1e-12);
        assert!((result.imag - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_pixel_to_complex_uses_twice_half_width_per_frame() {
        let size = FrameSize::new(10, 10);
        let viewport = Viewport::new(Complex::new(0.0, 0.0), 1.0, 1.0, 100).unwrap();

        let a = pixel_to_complex_coords(Point { x: 3, y: 0 }, size, &viewport).unwrap();
        let b = pixel_to_complex_coords(Point { x: 4, y: 0 }, size, &viewport).unwrap();

        assert!((b.real - a.real - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_pixel_to_complex_outside_frame() {
        let size = FrameSize::new(100, 100);

        let result =
            pixel_to_complex_coords(Point { x: 100, y: 5 }, size, &Viewport::default());

        assert_eq!(
            result,
            Err(PixelToComplexCoordsError::PointOutsideFrame {
                point: Point { x: 100, y: 5 },
                size
            })
        );
    }

    #[test]
    fn test_pixel_to_complex_negative_point() {
        let size = FrameSize::new(100, 100);

        let result = pixel_to_complex_coords(Point { x: -1, y: 5 }, size, &Viewport::default());

        assert!(result.is_err());
    }
}
