use crate::core::data::frame_size::FrameSize;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationBufferLengthError {
    pub expected: usize,
    pub actual: usize,
}

impl fmt::Display for IterationBufferLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "iteration buffer holds {} counts but the frame needs {}",
            self.actual, self.expected
        )
    }
}

impl Error for IterationBufferLengthError {}

/// Per-pixel escape counts for one frame, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationBuffer {
    size: FrameSize,
    max_depth: u32,
    counts: Vec<u32>,
}

impl IterationBuffer {
    pub fn new(
        size: FrameSize,
        max_depth: u32,
        counts: Vec<u32>,
    ) -> Result<Self, IterationBufferLengthError> {
        if counts.len() != size.pixel_count() {
            return Err(IterationBufferLengthError {
                expected: size.pixel_count(),
                actual: counts.len(),
            });
        }

        Ok(Self {
            size,
            max_depth,
            counts,
        })
    }

    #[must_use]
    pub fn size(&self) -> FrameSize {
        self.size
    }

    /// Depth the counts were computed with.
    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_matching_length() {
        let buffer = IterationBuffer::new(FrameSize::new(3, 2), 50, vec![0, 1, 2, 3, 4, 50]).unwrap();

        assert_eq!(buffer.size(), FrameSize::new(3, 2));
        assert_eq!(buffer.max_depth(), 50);
        assert_eq!(buffer.counts()[5], 50);
    }

    #[test]
    fn test_new_rejects_short_buffer() {
        let result = IterationBuffer::new(FrameSize::new(3, 2), 50, vec![0; 5]);

        assert_eq!(
            result,
            Err(IterationBufferLengthError {
                expected: 6,
                actual: 5
            })
        );
    }
}
