use crate::core::data::complex::Complex;
use std::time::Duration;

/// Point deep in the seahorse valley the benchmark trajectory zooms toward.
pub const DEFAULT_BENCHMARK_TARGET: Complex =
    Complex::new(-0.163_492_293_067_676_82, -1.026_097_073_984_018_5);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkSettings {
    /// Zoom steps rendered per backend.
    pub steps: u32,
    /// Pause after each frame so the run stays watchable.
    pub frame_delay: Duration,
    /// Emit a progress line every this many frames (0 disables progress).
    pub progress_interval: u32,
    pub target: Complex,
}

impl Default for BenchmarkSettings {
    fn default() -> Self {
        Self {
            steps: 100,
            frame_delay: Duration::from_millis(10),
            progress_interval: 10,
            target: DEFAULT_BENCHMARK_TARGET,
        }
    }
}
