use anyhow::{Context, Result};
use amdahl_viz::{
    chart::LineChart,
    cli::{ChartFormat, Cli, OutputFormat},
    config::ProjectConfig,
    csv_output::CsvOutput,
    html_output::HtmlReport,
    json_output::JsonOutput,
    summary, sweep,
};
use clap::Parser;
use std::fs;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Load the config file if one was given, otherwise use the built-in defaults
fn load_config(args: &Cli) -> Result<ProjectConfig> {
    let config = match &args.config {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            ProjectConfig::from_toml(path)?
        }
        None => ProjectConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let config = load_config(&args)?;
    let results = sweep::run_sweep(&config.baseline, &config.scenarios, &config.sweep)?;
    let takeaways = summary::key_takeaways(&config.baseline, &config.takeaways)?;

    match args.format {
        OutputFormat::Text => {
            print!("{}", summary::render_summary(&config.baseline, &takeaways));
        }
        OutputFormat::Json => {
            let output = JsonOutput::new(&config.baseline, &results, &takeaways);
            println!("{}", output.to_json()?);
        }
        OutputFormat::Csv => {
            print!("{}", CsvOutput::new(&results).to_csv());
        }
    }

    if !args.no_chart {
        let svg = LineChart::new(&config.baseline, &config.sweep, &results).to_svg();
        let document = match args.chart_format {
            ChartFormat::Svg => svg,
            ChartFormat::Html => {
                HtmlReport::new(&config.baseline, &results, &takeaways, svg).to_html()
            }
        };

        fs::write(&args.output, document)
            .with_context(|| format!("Failed to write chart: {}", args.output.display()))?;
        tracing::info!("Wrote chart to {}", args.output.display());

        if args.format == OutputFormat::Text {
            println!("\nChart written to {}", args.output.display());
        }
    }

    Ok(())
}
