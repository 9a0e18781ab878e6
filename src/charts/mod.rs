//! Chart Builders
//!
//! Shapes the dashboard payload into chart configurations. A
//! [`ChartConfig`] serializes to the JSON object Chart.js accepts as its
//! second constructor argument.
//!
//! - [`status`]: task status doughnut
//! - [`solar`]: real vs. forecast solar energy line chart
//! - [`activity`]: completed tasks per day bar chart

pub mod activity;
pub mod solar;
pub mod status;

mod config;

pub use activity::{build_activity_chart, ACTIVITY_LABEL};
pub use config::{
    Axis, ChartConfig, ChartData, ChartKind, ChartOptions, Dataset, Font, Legend, LegendLabels,
    Plugins, Scales, Ticks,
};
pub use solar::{build_solar_chart, FORECAST_DASH, FORECAST_LABEL, REAL_LABEL};
pub use status::{build_status_chart, STATUS_LABELS};

/// Legend text color
pub const LEGEND_COLOR: &str = "#e5e7eb";

/// Legend font size in pixels
pub const LEGEND_FONT_SIZE: u32 = 11;

/// Axis tick color
pub const TICK_COLOR: &str = "#9ca3af";

/// Curve tension for line series
pub const LINE_TENSION: f64 = 0.35;
