//! amdahl-viz - Amdahl's Law project-time projections
//!
//! This library computes how long a fixed amount of work takes as the team
//! grows, when part of that work is strictly sequential, and renders the
//! results as an annotated SVG line chart, an HTML report, CSV, or JSON.

pub mod chart;
pub mod cli;
pub mod config;
pub mod csv_output;
pub mod html_output;
pub mod json_output;
pub mod projection;
pub mod scenario;
pub mod summary;
pub mod sweep;
