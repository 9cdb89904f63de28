//! CLI argument parsing for amdahl-viz

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the projection results printed to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary with key takeaways (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

/// File format for the rendered chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartFormat {
    /// Standalone HTML report with the chart and a projection table
    Html,
    /// Bare SVG image
    Svg,
}

#[derive(Parser, Debug)]
#[command(name = "amdahl-viz")]
#[command(version)]
#[command(about = "Project completion time against team size (Amdahl's Law)", long_about = None)]
pub struct Cli {
    /// TOML file overriding the baseline, sweep, scenarios, or takeaways
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format (text, json, or csv)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Where to write the chart
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = "amdahl_chart.html"
    )]
    pub output: PathBuf,

    /// Chart file format
    #[arg(long = "chart-format", value_enum, default_value = "html")]
    pub chart_format: ChartFormat,

    /// Skip writing the chart
    #[arg(long = "no-chart")]
    pub no_chart: bool,

    /// Enable debug logging to stderr
    #[arg(long)]
    pub debug: bool,
}
