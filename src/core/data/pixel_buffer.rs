use crate::core::data::colour::Colour;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        size: FrameSize,
    },
    BoundsMismatch {
        frame_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                frame_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "frame size {} does not match buffer size {}",
                    frame_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, size } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} frame",
                    pixel.x,
                    pixel.y,
                    size.width(),
                    size.height()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

/// Row-major grid of packed `0x00RRGGBB` colours.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    size: FrameSize,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(size: FrameSize) -> Self {
        Self {
            size,
            pixels: vec![0; size.pixel_count()],
        }
    }

    pub fn from_data(size: FrameSize, pixels: Vec<u32>) -> Result<Self, PixelBufferError> {
        if size.pixel_count() != pixels.len() {
            return Err(PixelBufferError::BoundsMismatch {
                frame_size: size.pixel_count(),
                buffer_size: pixels.len(),
            });
        }

        Ok(Self { size, pixels })
    }

    #[must_use]
    pub fn size(&self) -> FrameSize {
        self.size
    }

    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Mutable rows of the buffer, top to bottom.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u32]> {
        let width = (self.size.width() as usize).max(1);
        self.pixels.chunks_exact_mut(width)
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.size.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                size: self.size,
            });
        }

        Ok(pixel.y as usize * self.size.width() as usize + pixel.x as usize)
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;
        self.pixels[index] = colour.packed();

        Ok(())
    }

    #[must_use]
    pub fn get_pixel(&self, pixel: Point) -> Option<Colour> {
        self.index_of(pixel)
            .ok()
            .map(|index| Colour::from_packed(self.pixels[index]))
    }

    /// Three bytes per pixel, as written to a binary PPM.
    #[must_use]
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);

        for &packed in &self.pixels {
            let Colour { r, g, b } = Colour::from_packed(packed);
            bytes.extend_from_slice(&[r, g, b]);
        }

        bytes
    }

    /// Copies into an RGBA destination (4 bytes per pixel), alpha set to 255.
    ///
    /// # Errors
    /// Returns [`PixelBufferError::BoundsMismatch`] when `dst` is not exactly
    /// four bytes per pixel.
    pub fn copy_to_rgba(&self, dst: &mut [u8]) -> Result<(), PixelBufferError> {
        let expected = self.pixels.len() * 4;
        if dst.len() != expected {
            return Err(PixelBufferError::BoundsMismatch {
                frame_size: expected,
                buffer_size: dst.len(),
            });
        }

        for (&packed, dst_pixel) in self.pixels.iter().zip(dst.chunks_exact_mut(4)) {
            let Colour { r, g, b } = Colour::from_packed(packed);
            dst_pixel[0] = r;
            dst_pixel[1] = g;
            dst_pixel[2] = b;
            dst_pixel[3] = 255;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Colour = Colour { r: 255, g: 0, b: 0 };
    const GREEN: Colour = Colour { r: 0, g: 255, b: 0 };
    const BLUE: Colour = Colour { r: 0, g: 0, b: 255 };

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let buffer = PixelBuffer::new(FrameSize::new(10, 10));

        assert_eq!(buffer.size(), FrameSize::new(10, 10));
        assert_eq!(buffer.pixels().len(), 100);
        assert!(buffer.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_from_data_valid() {
        let data = vec![RED.packed(), GREEN.packed(), BLUE.packed(), 0];
        let buffer = PixelBuffer::from_data(FrameSize::new(2, 2), data.clone()).unwrap();

        assert_eq!(buffer.pixels(), data.as_slice());
    }

    #[test]
    fn test_from_data_length_mismatch() {
        let result = PixelBuffer::from_data(FrameSize::new(2, 2), vec![0; 3]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                frame_size: 4,
                buffer_size: 3
            }
        );
    }

    #[test]
    fn test_set_pixel_writes_row_major() {
        let mut buffer = PixelBuffer::new(FrameSize::new(3, 2));

        buffer.set_pixel(Point { x: 2, y: 1 }, BLUE).unwrap();

        assert_eq!(buffer.pixels()[5], BLUE.packed());
        assert_eq!(buffer.get_pixel(Point { x: 2, y: 1 }), Some(BLUE));
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let size = FrameSize::new(3, 3);
        let mut buffer = PixelBuffer::new(size);

        let result = buffer.set_pixel(Point { x: 3, y: 1 }, RED);

        assert_eq!(
            result,
            Err(PixelBufferError::PixelOutsideBounds {
                pixel: Point { x: 3, y: 1 },
                size
            })
        );
        assert!(buffer.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_set_pixel_negative_is_rejected() {
        let mut buffer = PixelBuffer::new(FrameSize::new(3, 3));

        assert!(buffer.set_pixel(Point { x: -1, y: -1 }, RED).is_err());
        assert_eq!(buffer.get_pixel(Point { x: -1, y: 0 }), None);
    }

    #[test]
    fn test_rows_mut_yields_each_row() {
        let mut buffer = PixelBuffer::new(FrameSize::new(2, 3));

        for (row_index, row) in buffer.rows_mut().enumerate() {
            row.fill(row_index as u32);
        }

        assert_eq!(buffer.pixels(), &[0, 0, 1, 1, 2, 2]);
    }

    #[test]
    fn test_to_rgb_bytes() {
        let buffer =
            PixelBuffer::from_data(FrameSize::new(2, 1), vec![RED.packed(), BLUE.packed()])
                .unwrap();

        assert_eq!(buffer.to_rgb_bytes(), vec![255, 0, 0, 0, 0, 255]);
    }

    #[test]
    fn test_copy_to_rgba_sets_alpha() {
        let buffer =
            PixelBuffer::from_data(FrameSize::new(2, 1), vec![0x0080_4020, GREEN.packed()])
                .unwrap();
        let mut dst = vec![0; 8];

        buffer.copy_to_rgba(&mut dst).unwrap();

        assert_eq!(dst, vec![128, 64, 32, 255, 0, 255, 0, 255]);
    }

    #[test]
    fn test_copy_to_rgba_rejects_wrong_length() {
        let buffer = PixelBuffer::new(FrameSize::new(2, 2));
        let mut dst = vec![0; 12];

        assert_eq!(
            buffer.copy_to_rgba(&mut dst),
            Err(PixelBufferError::BoundsMismatch {
                frame_size: 16,
                buffer_size: 12
            })
        );
    }
}
