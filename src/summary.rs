//! Console summary with key takeaways

use crate::projection::{self, ProjectionError, Result};
use crate::sweep::Baseline;
use serde::{Deserialize, Serialize};

/// Team size the takeaways are quoted at
pub const TAKEAWAY_WORKERS: u32 = 100;

/// Which (team size, sequential fraction) pairs to quote in the summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Takeaways {
    pub workers: u32,
    pub fractions: Vec<f64>,
}

impl Default for Takeaways {
    fn default() -> Self {
        Self {
            workers: TAKEAWAY_WORKERS,
            fractions: vec![0.1, 0.9],
        }
    }
}

impl Takeaways {
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(ProjectionError::Configuration(
                "takeaway workers must be greater than zero".to_string(),
            ));
        }
        for &fraction in &self.fractions {
            projection::validate_fraction(fraction)?;
        }
        Ok(())
    }
}

/// One computed takeaway
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyTakeaway {
    pub sequential_fraction: f64,
    pub workers: u32,
    pub months: f64,
}

/// Compute the configured takeaways against the baseline
pub fn key_takeaways(baseline: &Baseline, takeaways: &Takeaways) -> Result<Vec<KeyTakeaway>> {
    takeaways
        .fractions
        .iter()
        .map(|&fraction| -> Result<KeyTakeaway> {
            let months = projection::project_time(
                baseline.total_work(),
                baseline.workers,
                fraction,
                takeaways.workers,
            )?;
            Ok(KeyTakeaway {
                sequential_fraction: fraction,
                workers: takeaways.workers,
                months,
            })
        })
        .collect()
}

/// Render the human-readable console summary
pub fn render_summary(baseline: &Baseline, takeaways: &[KeyTakeaway]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Project Scenario: {} workers take {} months\n",
        baseline.workers, baseline.time_months
    ));
    out.push_str(&format!(
        "Total work required: {} worker-months\n",
        baseline.total_work()
    ));
    out.push_str(&"-".repeat(50));
    out.push('\n');

    out.push_str("\n🎯 KEY TAKEAWAYS:\n");
    for takeaway in takeaways {
        out.push_str(&format!(
            "• With {:.0}% sequential work: {} workers finish in ~{:.1} months\n",
            takeaway.sequential_fraction * 100.0,
            takeaway.workers,
            takeaway.months
        ));
    }
    out.push_str("• The 'sequential bottleneck' limits how much adding workers can help!\n");

    out
}
