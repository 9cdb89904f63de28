//! Time projection calculator
//!
//! Projects total completion time for a team of a given size, splitting the
//! work into a sequential portion and a parallel portion:
//!
//! ```text
//! sequential_time = (sequential_fraction * total_work) / baseline_workers
//! parallel_time   = (total_work * (1 - sequential_fraction)) / workers
//! total_time      = sequential_time + parallel_time
//! ```
//!
//! The sequential portion is divided by the *baseline* team size. Adding
//! workers never shortens it; only the parallel portion shrinks.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while projecting completion times
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    #[error("Division by zero: {field} must be greater than zero")]
    DivisionByZero { field: &'static str },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for projection operations
pub type Result<T> = std::result::Result<T, ProjectionError>;

/// Breakdown of a single projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeProjection {
    /// Team size the projection was computed for
    pub workers: u32,
    /// Months spent on the sequential portion
    pub sequential_time: f64,
    /// Months spent on the parallel portion
    pub parallel_time: f64,
    /// Total months to completion
    pub total_time: f64,
}

/// Check that a sequential fraction lies in the unit interval
pub fn validate_fraction(sequential_fraction: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&sequential_fraction) {
        return Err(ProjectionError::Configuration(format!(
            "sequential_fraction must be in [0, 1], got {}",
            sequential_fraction
        )));
    }
    Ok(())
}

/// Project completion time and keep the per-term breakdown
///
/// # Errors
/// - [`ProjectionError::DivisionByZero`] if `baseline_workers` or `workers` is zero
/// - [`ProjectionError::Configuration`] if `total_work` is not a positive finite
///   number or `sequential_fraction` is outside `[0, 1]`
pub fn project(
    total_work: f64,
    baseline_workers: u32,
    sequential_fraction: f64,
    workers: u32,
) -> Result<TimeProjection> {
    if baseline_workers == 0 {
        return Err(ProjectionError::DivisionByZero {
            field: "baseline_workers",
        });
    }
    if workers == 0 {
        return Err(ProjectionError::DivisionByZero { field: "workers" });
    }
    if !total_work.is_finite() || total_work <= 0.0 {
        return Err(ProjectionError::Configuration(format!(
            "total_work must be positive, got {}",
            total_work
        )));
    }
    validate_fraction(sequential_fraction)?;

    let sequential_time = (sequential_fraction * total_work) / f64::from(baseline_workers);
    let parallel_work = total_work * (1.0 - sequential_fraction);
    let parallel_time = parallel_work / f64::from(workers);

    Ok(TimeProjection {
        workers,
        sequential_time,
        parallel_time,
        total_time: sequential_time + parallel_time,
    })
}

/// Project total completion time in months
///
/// # Example
/// ```
/// use amdahl_viz::projection::project_time;
///
/// let months = project_time(720.0, 20, 0.1, 100).unwrap();
/// assert!((months - 10.08).abs() < 1e-9);
/// ```
pub fn project_time(
    total_work: f64,
    baseline_workers: u32,
    sequential_fraction: f64,
    workers: u32,
) -> Result<f64> {
    project(total_work, baseline_workers, sequential_fraction, workers).map(|p| p.total_time)
}
