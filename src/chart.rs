//! SVG line chart of completion time against team size
//!
//! One polyline per scenario, a dashed reference line at the baseline
//! duration, legend, grid, and an annotation box. Lines that leave the
//! plot area are clipped rather than rescaling the y axis.

use crate::html_output::escape_html;
use crate::sweep::{Baseline, ScenarioProjection, TeamSizeSweep};

/// y axis never shows less than this many months
const MIN_Y_MAX: f64 = 60.0;

/// Headroom above the baseline duration on the y axis
const Y_HEADROOM: f64 = 10.0;

/// Data coordinates (workers, months) of the annotation box's top-left corner
const ANNOTATION_ANCHOR: (f64, f64) = (25.0, 15.0);

/// Pixel geometry of the chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            margin_left: 90.0,
            margin_right: 40.0,
            margin_top: 100.0,
            margin_bottom: 170.0,
        }
    }
}

impl ChartLayout {
    fn plot_width(&self) -> f64 {
        self.width - self.margin_left - self.margin_right
    }

    fn plot_height(&self) -> f64 {
        self.height - self.margin_top - self.margin_bottom
    }
}

/// Pick a 1/2/5 × 10^k step giving at most `max_ticks` intervals over `range`
pub fn nice_step(range: f64, max_ticks: u32) -> f64 {
    if range <= 0.0 || max_ticks == 0 {
        return 1.0;
    }
    let mut magnitude = 10f64.powf((range / f64::from(max_ticks)).log10().floor());
    loop {
        for factor in [1.0, 2.0, 5.0] {
            let step = factor * magnitude;
            if range / step <= f64::from(max_ticks) + 1e-9 {
                return step;
            }
        }
        magnitude *= 10.0;
    }
}

/// Tick positions from 0 to `max` inclusive, `step` apart
fn ticks(max: f64, step: f64) -> Vec<f64> {
    let count = (max / step + 1e-9).floor() as usize;
    (0..=count).map(|i| i as f64 * step).collect()
}

/// Tick label with as many decimals as the step needs
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 {
        0
    } else {
        (-step.log10().floor()).max(0.0) as usize
    };
    format!("{:.*}", decimals, value)
}

/// Line chart over a completed sweep
#[derive(Debug)]
pub struct LineChart<'a> {
    baseline: Baseline,
    team_sizes: Vec<u32>,
    series: &'a [ScenarioProjection],
    layout: ChartLayout,
    x_max: f64,
    y_max: f64,
}

impl<'a> LineChart<'a> {
    pub fn new(baseline: &Baseline, sweep: &TeamSizeSweep, series: &'a [ScenarioProjection]) -> Self {
        Self {
            baseline: *baseline,
            team_sizes: sweep.team_sizes(),
            series,
            layout: ChartLayout::default(),
            x_max: f64::from(sweep.end.max(1)),
            y_max: (baseline.time_months + Y_HEADROOM).max(MIN_Y_MAX),
        }
    }

    pub fn with_layout(mut self, layout: ChartLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Upper bounds of the (x, y) axes in data units
    pub fn axis_limits(&self) -> (f64, f64) {
        (self.x_max, self.y_max)
    }

    fn px(&self, workers: f64) -> f64 {
        self.layout.margin_left + workers / self.x_max * self.layout.plot_width()
    }

    fn py(&self, months: f64) -> f64 {
        self.layout.margin_top + self.layout.plot_height() - months / self.y_max * self.layout.plot_height()
    }

    /// Render the complete SVG document
    pub fn to_svg(&self) -> String {
        let l = &self.layout;
        let mut svg = String::new();

        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"Helvetica, Arial, sans-serif\">\n",
            w = l.width,
            h = l.height
        ));
        svg.push_str(&format!(
            "  <defs><clipPath id=\"plot-area\"><rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\"/></clipPath></defs>\n",
            l.margin_left,
            l.margin_top,
            l.plot_width(),
            l.plot_height()
        ));
        svg.push_str(&format!(
            "  <rect width=\"{}\" height=\"{}\" fill=\"white\"/>\n",
            l.width, l.height
        ));

        svg.push_str(&self.render_title());
        svg.push_str(&self.render_grid_and_axes());
        svg.push_str(&self.render_baseline_line());
        for series in self.series {
            svg.push_str(&self.render_series(series));
        }
        svg.push_str(&self.render_legend());
        svg.push_str(&self.render_annotation());
        svg.push_str(&self.render_footer());

        svg.push_str("</svg>\n");
        svg
    }

    fn render_title(&self) -> String {
        let cx = self.layout.width / 2.0;
        format!(
            "  <text class=\"title\" x=\"{cx:.2}\" y=\"40\" text-anchor=\"middle\" font-size=\"22\" font-weight=\"bold\">Why Adding More Workers Doesn&#39;t Always Speed Up Projects</text>\n\
             \x20 <text x=\"{cx:.2}\" y=\"68\" text-anchor=\"middle\" font-size=\"18\" font-weight=\"bold\">(Amdahl&#39;s Law in Action)</text>\n"
        )
    }

    fn render_grid_and_axes(&self) -> String {
        let l = &self.layout;
        let mut out = String::new();
        let left = l.margin_left;
        let right = l.margin_left + l.plot_width();
        let top = l.margin_top;
        let bottom = l.margin_top + l.plot_height();

        out.push_str("  <g class=\"grid\" stroke=\"#999\" stroke-opacity=\"0.3\" stroke-width=\"0.5\">\n");
        let x_step = nice_step(self.x_max, 10);
        let x_ticks = ticks(self.x_max, x_step);
        for &x in &x_ticks {
            let px = self.px(x);
            out.push_str(&format!(
                "    <line x1=\"{px:.2}\" y1=\"{top:.2}\" x2=\"{px:.2}\" y2=\"{bottom:.2}\"/>\n"
            ));
        }
        let y_step = nice_step(self.y_max, 10);
        let y_ticks = ticks(self.y_max, y_step);
        for &y in &y_ticks {
            let py = self.py(y);
            out.push_str(&format!(
                "    <line x1=\"{left:.2}\" y1=\"{py:.2}\" x2=\"{right:.2}\" y2=\"{py:.2}\"/>\n"
            ));
        }
        out.push_str("  </g>\n");

        out.push_str(&format!(
            "  <rect x=\"{left:.2}\" y=\"{top:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"none\" stroke=\"black\"/>\n",
            l.plot_width(),
            l.plot_height()
        ));

        out.push_str("  <g class=\"ticks\" font-size=\"13\">\n");
        for &x in &x_ticks {
            out.push_str(&format!(
                "    <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\">{}</text>\n",
                self.px(x),
                bottom + 20.0,
                format_tick(x, x_step)
            ));
        }
        for &y in &y_ticks {
            out.push_str(&format!(
                "    <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"end\">{}</text>\n",
                left - 8.0,
                self.py(y) + 4.0,
                format_tick(y, y_step)
            ));
        }
        out.push_str("  </g>\n");

        out.push_str(&format!(
            "  <text class=\"axis-label\" x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-size=\"16\" font-weight=\"bold\">Number of Workers on the Project</text>\n",
            left + l.plot_width() / 2.0,
            bottom + 50.0
        ));
        let ly = top + l.plot_height() / 2.0;
        out.push_str(&format!(
            "  <text class=\"axis-label\" x=\"30\" y=\"{ly:.2}\" text-anchor=\"middle\" font-size=\"16\" font-weight=\"bold\" transform=\"rotate(-90 30 {ly:.2})\">Total Project Time (Months)</text>\n"
        ));

        out
    }

    fn render_baseline_line(&self) -> String {
        let (Some(&first), Some(&last)) = (self.team_sizes.first(), self.team_sizes.last()) else {
            return String::new();
        };
        let py = self.py(self.baseline.time_months);
        format!(
            "  <line class=\"baseline\" x1=\"{:.2}\" y1=\"{py:.2}\" x2=\"{:.2}\" y2=\"{py:.2}\" stroke=\"gray\" stroke-width=\"2\" stroke-opacity=\"0.7\" stroke-dasharray=\"8,6\" clip-path=\"url(#plot-area)\"/>\n",
            self.px(f64::from(first)),
            self.px(f64::from(last))
        )
    }

    fn render_series(&self, series: &ScenarioProjection) -> String {
        let color = escape_html(&series.scenario.color);
        let points: Vec<String> = series
            .points
            .iter()
            .map(|p| format!("{:.2},{:.2}", self.px(f64::from(p.workers)), self.py(p.total_time)))
            .collect();

        let mut out = format!(
            "  <g class=\"series\" clip-path=\"url(#plot-area)\" stroke=\"{color}\" fill=\"{color}\" opacity=\"0.8\">\n"
        );
        out.push_str(&format!(
            "    <title>{}</title>\n",
            escape_html(&series.scenario.label)
        ));
        out.push_str(&format!(
            "    <polyline points=\"{}\" fill=\"none\" stroke-width=\"3\"/>\n",
            points.join(" ")
        ));
        for p in &series.points {
            out.push_str(&format!(
                "    <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"5\" stroke=\"none\"/>\n",
                self.px(f64::from(p.workers)),
                self.py(p.total_time)
            ));
        }
        out.push_str("  </g>\n");
        out
    }

    fn baseline_label(&self) -> String {
        format!(
            "Original: {} workers, {} months",
            self.baseline.workers, self.baseline.time_months
        )
    }

    fn render_legend(&self) -> String {
        let l = &self.layout;
        let row_height = 24.0;
        let box_width = 380.0;
        let rows = self.series.len() + 1;
        let box_height = row_height * rows as f64 + 12.0;
        let x = l.margin_left + l.plot_width() - box_width - 10.0;
        let y = l.margin_top + 10.0;

        let mut out = format!(
            "  <g class=\"legend\" font-size=\"13\">\n    <rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{box_width:.2}\" height=\"{box_height:.2}\" rx=\"4\" fill=\"white\" fill-opacity=\"0.9\" stroke=\"#ccc\"/>\n"
        );

        let entries = self
            .series
            .iter()
            .map(|s| (escape_html(&s.scenario.label), escape_html(&s.scenario.color), ""))
            .chain(std::iter::once((
                escape_html(&self.baseline_label()),
                "gray".to_string(),
                " stroke-dasharray=\"8,6\"",
            )));

        for (i, (label, color, dash)) in entries.enumerate() {
            let row_y = y + 6.0 + row_height * (i as f64 + 0.5);
            out.push_str(&format!(
                "    <line x1=\"{:.2}\" y1=\"{row_y:.2}\" x2=\"{:.2}\" y2=\"{row_y:.2}\" stroke=\"{color}\" stroke-width=\"3\"{dash}/>\n",
                x + 10.0,
                x + 40.0
            ));
            out.push_str(&format!(
                "    <text x=\"{:.2}\" y=\"{:.2}\">{label}</text>\n",
                x + 50.0,
                row_y + 4.0
            ));
        }

        out.push_str("  </g>\n");
        out
    }

    fn render_annotation(&self) -> String {
        let x = self.px(ANNOTATION_ANCHOR.0);
        let y = self.py(ANNOTATION_ANCHOR.1) - 50.0;
        format!(
            "  <g class=\"annotation\" font-size=\"15\">\n\
             \x20   <rect x=\"{:.2}\" y=\"{:.2}\" width=\"380\" height=\"56\" rx=\"10\" fill=\"lightyellow\" fill-opacity=\"0.8\" stroke=\"#333\"/>\n\
             \x20   <text x=\"{:.2}\" y=\"{:.2}\">* Key Insight: When most work is sequential,</text>\n\
             \x20   <text x=\"{:.2}\" y=\"{:.2}\">adding workers helps very little!</text>\n\
             \x20 </g>\n",
            x,
            y,
            x + 12.0,
            y + 23.0,
            x + 12.0,
            y + 43.0
        )
    }

    fn render_footer(&self) -> String {
        let mut lines = vec![
            "&gt; Each line shows how project time changes with team size for different types of work."
                .to_string(),
        ];

        let by_fraction = |a: &&ScenarioProjection, b: &&ScenarioProjection| {
            a.scenario
                .sequential_fraction
                .total_cmp(&b.scenario.sequential_fraction)
        };
        let most_sequential = self.series.iter().max_by(by_fraction);
        let most_parallel = self.series.iter().min_by(by_fraction);

        if let Some(s) = most_sequential {
            lines.push(format!(
                "&gt; {} line ({:.0}% sequential): Adding workers barely helps - most work can&#39;t be parallelized.",
                escape_html(&s.scenario.color),
                s.scenario.sequential_fraction * 100.0
            ));
        }
        if let (Some(s), Some(hi)) = (most_parallel, most_sequential) {
            if s.scenario != hi.scenario {
                lines.push(format!(
                    "&gt; {} line ({:.0}% sequential): Adding workers helps a lot - most work can be split up.",
                    escape_html(&s.scenario.color),
                    s.scenario.sequential_fraction * 100.0
                ));
            }
        }

        let mut out = String::from("  <g class=\"footer\" font-size=\"13\" font-style=\"italic\">\n");
        let base_y = self.layout.height - 70.0;
        for (i, line) in lines.iter().enumerate() {
            out.push_str(&format!(
                "    <text x=\"{:.2}\" y=\"{:.2}\">{}</text>\n",
                self.layout.margin_left,
                base_y + 20.0 * i as f64,
                line
            ));
        }
        out.push_str("  </g>\n");
        out
    }
}
