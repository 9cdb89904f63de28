//! Scenario × team-size sweep
//!
//! Evaluates the projection calculator for every (scenario, team size) pair.
//! Each scenario's results are kept in sweep order so they can be plotted
//! against the shared team-size axis.

use crate::projection::{self, ProjectionError, Result, TimeProjection};
use crate::scenario::Scenario;
use serde::{Deserialize, Serialize};

/// Workers on the reference team
pub const BASELINE_WORKERS: u32 = 20;

/// Months the reference team takes to finish
pub const BASELINE_TIME_MONTHS: f64 = 36.0;

/// Smallest team size in the default sweep
pub const SWEEP_START: u32 = 5;

/// Largest team size in the default sweep (inclusive)
pub const SWEEP_END: u32 = 100;

/// Step between team sizes in the default sweep
pub const SWEEP_STEP: u32 = 5;

/// Upper bound on the number of team sizes in one sweep
pub const MAX_TEAM_SIZES: u64 = 100_000;

/// Reference (workers, time) pair that fixes the total amount of work
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Baseline {
    pub workers: u32,
    pub time_months: f64,
}

impl Default for Baseline {
    fn default() -> Self {
        Self {
            workers: BASELINE_WORKERS,
            time_months: BASELINE_TIME_MONTHS,
        }
    }
}

impl Baseline {
    /// Total work in worker-months
    pub fn total_work(&self) -> f64 {
        f64::from(self.workers) * self.time_months
    }

    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(ProjectionError::Configuration(
                "baseline workers must be greater than zero".to_string(),
            ));
        }
        if !self.time_months.is_finite() || self.time_months <= 0.0 {
            return Err(ProjectionError::Configuration(format!(
                "baseline time must be positive, got {}",
                self.time_months
            )));
        }
        if !self.total_work().is_finite() {
            return Err(ProjectionError::Configuration(format!(
                "total work overflows: {} workers x {} months",
                self.workers, self.time_months
            )));
        }
        Ok(())
    }
}

/// Inclusive range of team sizes, stepped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TeamSizeSweep {
    pub start: u32,
    pub end: u32,
    pub step: u32,
}

impl Default for TeamSizeSweep {
    fn default() -> Self {
        Self {
            start: SWEEP_START,
            end: SWEEP_END,
            step: SWEEP_STEP,
        }
    }
}

impl TeamSizeSweep {
    pub fn validate(&self) -> Result<()> {
        if self.start == 0 {
            return Err(ProjectionError::Configuration(
                "team sizes must be positive, sweep starts at 0".to_string(),
            ));
        }
        if self.step == 0 {
            return Err(ProjectionError::Configuration(
                "sweep step must be greater than zero".to_string(),
            ));
        }
        if self.end < self.start {
            return Err(ProjectionError::Configuration(format!(
                "sweep end ({}) is below sweep start ({})",
                self.end, self.start
            )));
        }
        let count = u64::from(self.end - self.start) / u64::from(self.step) + 1;
        if count > MAX_TEAM_SIZES {
            return Err(ProjectionError::Configuration(format!(
                "sweep has {} team sizes, at most {} are allowed",
                count, MAX_TEAM_SIZES
            )));
        }
        Ok(())
    }

    /// Team sizes in ascending order, `end` included when it lands on a step
    pub fn team_sizes(&self) -> Vec<u32> {
        if self.step == 0 {
            return Vec::new();
        }
        (self.start..=self.end).step_by(self.step as usize).collect()
    }
}

/// Projections for one scenario, parallel-indexed to the team sizes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioProjection {
    pub scenario: Scenario,
    pub points: Vec<TimeProjection>,
}

impl ScenarioProjection {
    /// Total times in sweep order
    pub fn completion_times(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.total_time).collect()
    }
}

/// Run the projection for every scenario and team size
///
/// Aborts on the first calculator error.
pub fn run_sweep(
    baseline: &Baseline,
    scenarios: &[Scenario],
    sweep: &TeamSizeSweep,
) -> Result<Vec<ScenarioProjection>> {
    baseline.validate()?;
    sweep.validate()?;

    let total_work = baseline.total_work();
    let team_sizes = sweep.team_sizes();

    scenarios
        .iter()
        .map(|scenario| -> Result<ScenarioProjection> {
            scenario.validate()?;
            let points = team_sizes
                .iter()
                .map(|&workers| {
                    projection::project(
                        total_work,
                        baseline.workers,
                        scenario.sequential_fraction,
                        workers,
                    )
                })
                .collect::<Result<Vec<_>>>()?;

            tracing::debug!(
                "Projected {} team sizes for '{}' (sequential fraction {})",
                points.len(),
                scenario.label,
                scenario.sequential_fraction
            );

            Ok(ScenarioProjection {
                scenario: scenario.clone(),
                points,
            })
        })
        .collect()
}
