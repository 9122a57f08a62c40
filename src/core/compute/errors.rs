use std::error::Error;
use std::fmt;

/// Failure reported by a compute device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    NoSuchDevice { id: u32 },
    InitFailed(String),
    NotSelected,
    Dispatch(String),
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSuchDevice { id } => write!(f, "no compute device with id {}", id),
            Self::InitFailed(reason) => write!(f, "device initialisation failed: {}", reason),
            Self::NotSelected => write!(f, "no compute device selected"),
            Self::Dispatch(reason) => write!(f, "dispatch failed: {}", reason),
        }
    }
}

impl Error for DeviceError {}

/// Why a backend produced no iteration buffer for a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComputeFailure {
    DeviceUnavailable(DeviceError),
    DegenerateFrame { width: u32, height: u32 },
    DispatchError(DeviceError),
}

impl fmt::Display for ComputeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeviceUnavailable(err) => write!(f, "compute device unavailable: {}", err),
            Self::DegenerateFrame { width, height } => {
                write!(f, "cannot compute a {}x{} frame", width, height)
            }
            Self::DispatchError(err) => write!(f, "compute dispatch error: {}", err),
        }
    }
}

impl Error for ComputeFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DeviceUnavailable(err) | Self::DispatchError(err) => Some(err),
            Self::DegenerateFrame { .. } => None,
        }
    }
}
