//! Sequential vs parallel render comparison over a fixed zoom trajectory.

pub mod errors;
pub mod harness;
pub mod report;
pub mod result;
pub mod settings;
