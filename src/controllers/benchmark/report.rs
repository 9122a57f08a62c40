use crate::controllers::benchmark::result::BenchmarkResult;
use crate::core::data::complex::Complex;
use crate::core::data::frame_size::FrameSize;
use log::info;
use std::fmt;

/// Both backend results of one comparison run.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    pub sequential: BenchmarkResult,
    pub parallel: BenchmarkResult,
    pub steps: u32,
    pub frame_size: FrameSize,
    pub target: Complex,
}

impl BenchmarkReport {
    /// `sequential / parallel` total time, or `None` when the parallel run
    /// took no measurable time.
    #[must_use]
    pub fn speedup(&self) -> Option<f64> {
        if self.parallel.total_elapsed_millis > 0.0 {
            Some(self.sequential.total_elapsed_millis / self.parallel.total_elapsed_millis)
        } else {
            None
        }
    }

    /// Percentage by which the parallel backend beat the sequential one.
    #[must_use]
    pub fn performance_gain_percent(&self) -> Option<f64> {
        self.speedup().map(|speedup| (speedup - 1.0) * 100.0)
    }

    /// `label,value` lines for charting tools.
    #[must_use]
    pub fn csv_lines(&self) -> Vec<String> {
        let speedup = match self.speedup() {
            Some(speedup) => format!("{:.2}", speedup),
            None => "undefined".to_string(),
        };

        vec![
            format!(
                "{},{:.2}",
                self.sequential.backend.label(),
                self.sequential.total_elapsed_millis
            ),
            format!(
                "{},{:.2}",
                self.parallel.backend.label(),
                self.parallel.total_elapsed_millis
            ),
            format!("Speedup,{}", speedup),
        ]
    }

    pub fn log(&self) {
        for line in self.to_string().lines() {
            info!("{}", line);
        }
    }
}

fn write_result(f: &mut fmt::Formatter<'_>, result: &BenchmarkResult) -> fmt::Result {
    write!(
        f,
        "{} total: {:.2} ms over {} frames",
        result.backend_name, result.total_elapsed_millis, result.frame_count
    )?;
    if let Some(average) = result.average_frame_millis() {
        write!(f, " ({:.2} ms/frame)", average)?;
    }
    if result.skipped_frames > 0 {
        write!(f, ", {} skipped", result.skipped_frames)?;
    }
    writeln!(f)
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Benchmark results ({} steps at {}x{}):",
            self.steps,
            self.frame_size.width(),
            self.frame_size.height()
        )?;
        write_result(f, &self.sequential)?;
        write_result(f, &self.parallel)?;

        match (self.speedup(), self.performance_gain_percent()) {
            (Some(speedup), Some(gain)) => {
                writeln!(f, "Speedup: {:.2}x", speedup)?;
                writeln!(f, "Performance gain: {:.1}%", gain)?;
            }
            _ => writeln!(f, "Speedup: undefined (parallel run took no measurable time)")?,
        }

        writeln!(f, "Data for charts:")?;
        for line in self.csv_lines() {
            writeln!(f, "{}", line)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::compute::BackendKind;

    fn report(sequential_ms: f64, parallel_ms: f64) -> BenchmarkReport {
        BenchmarkReport {
            sequential: BenchmarkResult {
                total_elapsed_millis: sequential_ms,
                frame_count: 100,
                ..BenchmarkResult::new(BackendKind::Sequential)
            },
            parallel: BenchmarkResult {
                total_elapsed_millis: parallel_ms,
                frame_count: 100,
                ..BenchmarkResult::new(BackendKind::BulkParallel)
            },
            steps: 100,
            frame_size: FrameSize::new(800, 600),
            target: Complex::new(-0.1635, -1.0261),
        }
    }

    #[test]
    fn test_speedup_and_gain() {
        let report = report(1200.0, 300.0);

        assert_eq!(report.speedup(), Some(4.0));
        assert_eq!(report.performance_gain_percent(), Some(300.0));
    }

    #[test]
    fn test_zero_parallel_time_has_undefined_speedup() {
        let report = report(1200.0, 0.0);

        assert_eq!(report.speedup(), None);
        assert_eq!(report.performance_gain_percent(), None);
        assert_eq!(report.csv_lines()[2], "Speedup,undefined");
    }

    #[test]
    fn test_csv_lines() {
        let report = report(1234.5, 456.25);

        assert_eq!(
            report.csv_lines(),
            vec![
                "CPU,1234.50".to_string(),
                "GPU,456.25".to_string(),
                "Speedup,2.71".to_string()
            ]
        );
    }

    #[test]
    fn test_display_contains_summary_and_csv() {
        let text = report(1000.0, 250.0).to_string();

        assert!(text.contains("CPU (sequential) total: 1000.00 ms over 100 frames (10.00 ms/frame)"));
        assert!(text.contains("Speedup: 4.00x"));
        assert!(text.contains("Performance gain: 300.0%"));
        assert!(text.ends_with("Speedup,4.00\n"));
    }
}
