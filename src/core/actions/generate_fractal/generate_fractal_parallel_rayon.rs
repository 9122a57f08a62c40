use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::point::Point;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Rows are computed independently and only flattened once every row has
/// finished, so the caller never observes a partially computed frame. Runs on
/// the current rayon pool; wrap the call in `ThreadPool::install` to choose
/// another one.
pub fn generate_fractal_parallel_rayon<Alg>(
    size: FrameSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let width = size.width() as i32;
    let row_width = size.width() as usize;

    let rows: Result<Vec<Vec<Alg::Success>>, Alg::Failure> = (0..size.height() as i32)
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(row_width);

            for x in 0..width {
                row.push(algorithm.compute(Point { x, y })?);
            }

            Ok(row)
        })
        .collect();

    // Flatten rows into row-major order
    rows.map(|r| r.into_iter().flatten().collect())
}
