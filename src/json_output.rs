//! JSON output format for projection results

use crate::projection::TimeProjection;
use crate::summary::KeyTakeaway;
use crate::sweep::{Baseline, ScenarioProjection};
use serde::{Deserialize, Serialize};

/// Baseline section of the JSON document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonBaseline {
    pub workers: u32,
    pub time_months: f64,
    /// Worker-months
    pub total_work: f64,
}

/// One scenario's projections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonScenario {
    pub label: String,
    pub sequential_fraction: f64,
    pub color: String,
    pub projections: Vec<TimeProjection>,
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    pub version: String,
    pub format: String,
    pub baseline: JsonBaseline,
    pub team_sizes: Vec<u32>,
    pub scenarios: Vec<JsonScenario>,
    pub takeaways: Vec<KeyTakeaway>,
}

impl JsonOutput {
    pub fn new(
        baseline: &Baseline,
        series: &[ScenarioProjection],
        takeaways: &[KeyTakeaway],
    ) -> Self {
        let team_sizes = series
            .first()
            .map(|s| s.points.iter().map(|p| p.workers).collect())
            .unwrap_or_default();

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "amdahl-json-v1".to_string(),
            baseline: JsonBaseline {
                workers: baseline.workers,
                time_months: baseline.time_months,
                total_work: baseline.total_work(),
            },
            team_sizes,
            scenarios: series
                .iter()
                .map(|s| JsonScenario {
                    label: s.scenario.label.clone(),
                    sequential_fraction: s.scenario.sequential_fraction,
                    color: s.scenario.color.clone(),
                    projections: s.points.clone(),
                })
                .collect(),
            takeaways: takeaways.to_vec(),
        }
    }

    /// Serialize to pretty-printed JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
