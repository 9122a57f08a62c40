use crate::core::compute::BackendKind;

/// Totals for one backend over one benchmark trajectory.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    pub backend: BackendKind,
    pub backend_name: String,
    pub total_elapsed_millis: f64,
    /// Frames that were rendered and timed.
    pub frame_count: u32,
    /// Frames the backend failed to produce. They add no elapsed time.
    pub skipped_frames: u32,
}

impl BenchmarkResult {
    #[must_use]
    pub fn new(backend: BackendKind) -> Self {
        Self {
            backend,
            backend_name: backend.display_name().to_string(),
            total_elapsed_millis: 0.0,
            frame_count: 0,
            skipped_frames: 0,
        }
    }

    #[must_use]
    pub fn average_frame_millis(&self) -> Option<f64> {
        (self.frame_count > 0).then(|| self.total_elapsed_millis / f64::from(self.frame_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_result_is_empty() {
        let result = BenchmarkResult::new(BackendKind::Sequential);

        assert_eq!(result.backend_name, "CPU (sequential)");
        assert_eq!(result.frame_count, 0);
        assert_eq!(result.average_frame_millis(), None);
    }

    #[test]
    fn test_average_frame_time() {
        let result = BenchmarkResult {
            total_elapsed_millis: 250.0,
            frame_count: 100,
            ..BenchmarkResult::new(BackendKind::BulkParallel)
        };

        assert_eq!(result.average_frame_millis(), Some(2.5));
    }
}
