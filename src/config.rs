//! Project configuration
//!
//! Every value has a built-in default, so the tool runs with no input at all.
//! A TOML file can override any section:
//!
//! ```toml
//! [baseline]
//! workers = 20
//! time_months = 36.0
//!
//! [sweep]
//! start = 5
//! end = 100
//! step = 5
//!
//! [[scenario]]
//! sequential_fraction = 0.1
//! label = "Highly Parallel Work (10% sequential)"
//! color = "green"
//!
//! [takeaways]
//! workers = 100
//! fractions = [0.1, 0.9]
//! ```

use crate::projection::{ProjectionError, Result};
use crate::scenario::{builtin_scenarios, Scenario};
use crate::summary::Takeaways;
use crate::sweep::{Baseline, TeamSizeSweep};
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Complete input for one run
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    pub baseline: Baseline,
    pub sweep: TeamSizeSweep,
    #[serde(rename = "scenario")]
    pub scenarios: Vec<Scenario>,
    pub takeaways: Takeaways,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            baseline: Baseline::default(),
            sweep: TeamSizeSweep::default(),
            scenarios: builtin_scenarios(),
            takeaways: Takeaways::default(),
        }
    }
}

impl ProjectConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("Failed to parse TOML project configuration")
    }

    /// Load a configuration file
    ///
    /// # Errors
    /// Returns error if the file can't be read or has invalid TOML syntax.
    /// Semantic checks are left to [`ProjectConfig::validate`].
    pub fn from_toml<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read config file: {}", path.as_ref().display())
        })?;
        Self::from_toml_str(&content)
    }

    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.baseline.validate()?;
        self.sweep.validate()?;

        if self.scenarios.is_empty() {
            return Err(ProjectionError::Configuration(
                "at least one scenario is required".to_string(),
            ));
        }
        for scenario in &self.scenarios {
            scenario.validate()?;
        }

        self.takeaways.validate()
    }
}
