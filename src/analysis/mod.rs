//! Pure transformations that turn raw per-app usage minutes into the values
//! and geometry the dashboard draws: duration strings, gauge progress,
//! rankings, 100%-stacked breakdowns and week-over-week trends.
//!
//! Everything here is synchronous and side effect free. Recomputation is
//! O(apps in a period), so callers rerun these on every input change
//! instead of caching results.

pub mod duration_format;
pub mod progress;
pub mod ranking;
pub mod stacked;
pub mod trend;

use std::fmt::Display;

/// Contract violations of the computation layer. These indicate a caller
/// bug (inputs must be validated or clamped upstream), not a runtime
/// condition to surface to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractError {
    /// Negative minute count passed to a computation expecting elapsed time.
    InvalidDuration(i64),
    /// Non-positive goal passed to a progress computation.
    InvalidGoal(i64),
}

impl Display for ContractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContractError::InvalidDuration(minutes) => {
                write!(f, "duration of {minutes} minutes is negative")
            }
            ContractError::InvalidGoal(goal) => {
                write!(f, "goal of {goal} minutes is not positive")
            }
        }
    }
}

impl std::error::Error for ContractError {}
