//! Work-mix scenarios: how much of the project must run in sequence

use crate::projection::{self, Result};
use serde::{Deserialize, Serialize};

/// A work-mix scenario plotted as one line on the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Fraction of total work that cannot be parallelized (0.0 to 1.0)
    pub sequential_fraction: f64,
    /// Legend label
    pub label: String,
    /// Line color (any SVG/CSS color name or hex value)
    pub color: String,
}

impl Scenario {
    pub fn new(sequential_fraction: f64, label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            sequential_fraction,
            label: label.into(),
            color: color.into(),
        }
    }

    /// Reject fractions outside the unit interval
    pub fn validate(&self) -> Result<()> {
        projection::validate_fraction(self.sequential_fraction)
    }
}

/// The four built-in scenarios, from highly parallel to mostly sequential
pub fn builtin_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(0.1, "Highly Parallel Work (10% sequential)", "green"),
        Scenario::new(0.3, "Moderately Parallel (30% sequential)", "blue"),
        Scenario::new(0.5, "Mixed Work (50% sequential)", "orange"),
        Scenario::new(0.9, "Mostly Sequential (90% sequential)", "red"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_scenarios_order() {
        let scenarios = builtin_scenarios();
        let fractions: Vec<f64> = scenarios.iter().map(|s| s.sequential_fraction).collect();
        assert_eq!(fractions, vec![0.1, 0.3, 0.5, 0.9]);
        assert_eq!(scenarios[0].color, "green");
        assert_eq!(scenarios[3].color, "red");
    }

    #[test]
    fn test_builtin_scenarios_valid() {
        for scenario in builtin_scenarios() {
            assert!(scenario.validate().is_ok(), "{:?}", scenario);
        }
    }

    #[test]
    fn test_invalid_fraction_rejected() {
        let scenario = Scenario::new(1.2, "Impossible", "black");
        assert!(scenario.validate().is_err());
    }

    #[test]
    fn test_scenario_from_toml() {
        let toml = r#"
            sequential_fraction = 0.25
            label = "Quarter sequential"
            color = "purple"
        "#;
        let scenario: Scenario = toml::from_str(toml).unwrap();
        assert_eq!(scenario, Scenario::new(0.25, "Quarter sequential", "purple"));
    }

    #[test]
    fn test_scenario_unknown_key_rejected() {
        let toml = r#"
            sequential_fraction = 0.25
            label = "Quarter sequential"
            colour = "purple"
        "#;
        assert!(toml::from_str::<Scenario>(toml).is_err());
    }
}
