//! HTML report embedding the projection chart
//!
//! Wraps the SVG chart in a standalone page with embedded CSS, the key
//! takeaways, and a table of every projected completion time.

use crate::summary::KeyTakeaway;
use crate::sweep::{Baseline, ScenarioProjection};

/// Escape HTML/XML special characters
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// HTML report formatter
#[derive(Debug)]
pub struct HtmlReport<'a> {
    baseline: Baseline,
    series: &'a [ScenarioProjection],
    takeaways: &'a [KeyTakeaway],
    chart_svg: String,
}

impl<'a> HtmlReport<'a> {
    /// Create a new report from a rendered chart and the data behind it
    pub fn new(
        baseline: &Baseline,
        series: &'a [ScenarioProjection],
        takeaways: &'a [KeyTakeaway],
        chart_svg: String,
    ) -> Self {
        Self {
            baseline: *baseline,
            series,
            takeaways,
            chart_svg,
        }
    }

    /// Generate embedded CSS styles
    fn generate_styles() -> &'static str {
        r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 20px;
            background-color: #f5f5f5;
        }
        h1, h2 {
            color: #333;
        }
        .chart {
            background-color: white;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
            margin-bottom: 20px;
            overflow-x: auto;
        }
        table {
            border-collapse: collapse;
            width: 100%;
            background-color: white;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
            margin-bottom: 20px;
        }
        th, td {
            border: 1px solid #ddd;
            padding: 8px;
            text-align: right;
            font-family: monospace;
        }
        th {
            background-color: #4a90d9;
            color: white;
            font-weight: bold;
        }
        tr:nth-child(even) {
            background-color: #f9f9f9;
        }
        tr:hover {
            background-color: #f0f0f0;
        }
        .swatch {
            display: inline-block;
            width: 12px;
            height: 12px;
            margin-right: 6px;
        }
        .takeaways li {
            margin-bottom: 4px;
        }
        .footer {
            margin-top: 20px;
            font-size: 0.8em;
            color: #888;
            text-align: center;
        }
        "#
    }

    /// Generate the projection table header: one column per scenario
    fn generate_header(&self) -> String {
        let mut cells = vec!["<th>Workers</th>".to_string()];
        for series in self.series {
            cells.push(format!(
                r#"<th><span class="swatch" style="background-color: {}"></span>{}</th>"#,
                escape_html(&series.scenario.color),
                escape_html(&series.scenario.label)
            ));
        }
        format!("<tr>{}</tr>", cells.join(""))
    }

    /// Format one team size as a table row
    fn format_row(&self, index: usize) -> Option<String> {
        let workers = self.series.first()?.points.get(index)?.workers;
        let mut cells = vec![format!("<td>{}</td>", workers)];
        for series in self.series {
            let months = series.points.get(index).map(|p| p.total_time)?;
            cells.push(format!("<td>{:.2}</td>", months));
        }
        Some(format!("<tr>{}</tr>", cells.join("")))
    }

    fn render_takeaways(&self) -> String {
        let mut html = String::new();
        html.push_str("    <h2>Key Takeaways</h2>\n");
        html.push_str("    <ul class=\"takeaways\">\n");
        for t in self.takeaways {
            html.push_str(&format!(
                "        <li>With {:.0}% sequential work: {} workers finish in ~{:.1} months</li>\n",
                t.sequential_fraction * 100.0,
                t.workers,
                t.months
            ));
        }
        html.push_str(
            "        <li>The &#39;sequential bottleneck&#39; limits how much adding workers can help!</li>\n",
        );
        html.push_str("    </ul>\n");
        html
    }

    /// Generate complete HTML document
    pub fn to_html(&self) -> String {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n");
        html.push_str("<html lang=\"en\">\n");

        html.push_str("<head>\n");
        html.push_str("    <meta charset=\"UTF-8\">\n");
        html.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str("    <title>Amdahl&#39;s Law Projection</title>\n");
        html.push_str("    <style>");
        html.push_str(Self::generate_styles());
        html.push_str("</style>\n");
        html.push_str("</head>\n");

        html.push_str("<body>\n");
        html.push_str("    <h1>Amdahl&#39;s Law Projection</h1>\n");
        html.push_str(&format!(
            "    <p>Project Scenario: {} workers take {} months. Total work required: {} worker-months.</p>\n",
            self.baseline.workers,
            self.baseline.time_months,
            self.baseline.total_work()
        ));

        html.push_str("    <div class=\"chart\">\n");
        html.push_str(&self.chart_svg);
        html.push_str("    </div>\n");

        html.push_str(&self.render_takeaways());

        html.push_str("    <h2>Projected Completion Time (Months)</h2>\n");
        html.push_str("    <table>\n");
        html.push_str("        ");
        html.push_str(&self.generate_header());
        html.push('\n');

        let rows = self.series.first().map_or(0, |s| s.points.len());
        for index in 0..rows {
            if let Some(row) = self.format_row(index) {
                html.push_str("        ");
                html.push_str(&row);
                html.push('\n');
            }
        }
        html.push_str("    </table>\n");

        html.push_str("    <div class=\"footer\">\n");
        html.push_str("        Generated by amdahl-viz\n");
        html.push_str("    </div>\n");

        html.push_str("</body>\n");
        html.push_str("</html>\n");

        html
    }
}
