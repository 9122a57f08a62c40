use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::point::Point;

/// Evaluates `algorithm` for every pixel of the frame in row-major order on
/// the calling thread.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    size: FrameSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    let width = size.width() as i32;
    let height = size.height() as i32;

    (0..height)
        .flat_map(|y| (0..width).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::fmt;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl fmt::Display for StubError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    struct StubSuccessAlgorithm {}

    impl FractalAlgorithm for StubSuccessAlgorithm {
        type Success = (i32, i32);
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok((pixel.x, pixel.y))
        }
    }

    struct StubFailAtAlgorithm {
        fail_at: Point,
    }

    impl FractalAlgorithm for StubFailAtAlgorithm {
        type Success = u32;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            if pixel == self.fail_at {
                Err(StubError {})
            } else {
                Ok(1)
            }
        }
    }

    #[test]
    fn test_generate_fractal_visits_pixels_row_major() {
        let results = generate_fractal(FrameSize::new(3, 2), &StubSuccessAlgorithm {}).unwrap();

        assert_eq!(
            results,
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );
    }

    #[test]
    fn test_generate_fractal_propagates_failure() {
        let algorithm = StubFailAtAlgorithm {
            fail_at: Point { x: 1, y: 1 },
        };

        let result = generate_fractal(FrameSize::new(3, 3), &algorithm);

        assert_eq!(result, Err(StubError {}));
    }

    #[test]
    fn test_generate_fractal_empty_frame_yields_nothing() {
        let results = generate_fractal(FrameSize::new(0, 4), &StubSuccessAlgorithm {}).unwrap();

        assert!(results.is_empty());
    }
}
