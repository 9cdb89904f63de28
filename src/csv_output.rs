//! CSV output format for projection tables
//!
//! One row per (scenario, team size) pair, in sweep order.

use crate::sweep::ScenarioProjection;

/// CSV output formatter
#[derive(Debug)]
pub struct CsvOutput<'a> {
    series: &'a [ScenarioProjection],
}

impl<'a> CsvOutput<'a> {
    /// Create a new CSV output formatter
    pub fn new(series: &'a [ScenarioProjection]) -> Self {
        Self { series }
    }

    fn header() -> &'static str {
        "scenario,sequential_fraction,color,workers,sequential_time,parallel_time,total_time"
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str(Self::header());
        output.push('\n');

        for series in self.series {
            let label = Self::escape_field(&series.scenario.label);
            let color = Self::escape_field(&series.scenario.color);
            for p in &series.points {
                output.push_str(&format!(
                    "{},{},{},{},{:.4},{:.4},{:.4}\n",
                    label,
                    series.scenario.sequential_fraction,
                    color,
                    p.workers,
                    p.sequential_time,
                    p.parallel_time,
                    p.total_time
                ));
            }
        }

        output
    }
}
