use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchmarkError {
    AlreadyRunning,
    /// Shutdown was requested before the run finished.
    Cancelled,
}

impl fmt::Display for BenchmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyRunning => write!(f, "benchmark already running"),
            Self::Cancelled => write!(f, "benchmark cancelled"),
        }
    }
}

impl Error for BenchmarkError {}
