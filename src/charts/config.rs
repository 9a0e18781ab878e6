//! Chart configuration types
//!
//! Field names follow the Chart.js configuration object, so a config can be
//! handed to `new Chart(canvas, config)` after JSON serialization.

use serde::Serialize;

use super::{LEGEND_COLOR, LEGEND_FONT_SIZE, TICK_COLOR};

/// Full configuration for one chart instance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartConfig {
    /// Serialize to the JSON object passed to the charting library
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Look up a dataset by its label
    pub fn dataset(&self, label: &str) -> Option<&Dataset> {
        self.data
            .datasets
            .iter()
            .find(|d| d.label.as_deref() == Some(label))
    }
}

/// Chart type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Doughnut,
    Line,
    Bar,
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ChartKind::Doughnut => "doughnut",
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
        };
        f.write_str(name)
    }
}

/// Shared label axis plus the series plotted against it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// One series
///
/// `None` entries serialize as `null`, which leaves a gap in line charts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    pub data: Vec<Option<f64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<Vec<u32>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
}

impl Dataset {
    pub fn new(data: Vec<Option<f64>>) -> Self {
        Self {
            data,
            ..Default::default()
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn border_width(mut self, width: u32) -> Self {
        self.border_width = Some(width);
        self
    }

    pub fn border_dash(mut self, dash: Vec<u32>) -> Self {
        self.border_dash = Some(dash);
        self
    }

    pub fn tension(mut self, tension: f64) -> Self {
        self.tension = Some(tension);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
    pub plugins: Plugins,
}

impl ChartOptions {
    /// Themed legend, no axes (doughnut charts)
    pub fn legend_only() -> Self {
        Self {
            scales: None,
            plugins: Plugins::default(),
        }
    }

    /// Themed legend plus x/y axes; the x axis skips ticks beyond `max_x_ticks`
    pub fn with_axes(max_x_ticks: u32) -> Self {
        Self {
            scales: Some(Scales {
                x: Axis {
                    ticks: Ticks {
                        color: TICK_COLOR.to_string(),
                        auto_skip: Some(true),
                        max_ticks_limit: Some(max_x_ticks),
                    },
                },
                y: Axis {
                    ticks: Ticks {
                        color: TICK_COLOR.to_string(),
                        auto_skip: None,
                        max_ticks_limit: None,
                    },
                },
            }),
            plugins: Plugins::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub ticks: Ticks,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticks {
    pub color: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_skip: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ticks_limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

impl Default for Plugins {
    fn default() -> Self {
        Self {
            legend: Legend {
                labels: LegendLabels {
                    color: LEGEND_COLOR.to_string(),
                    font: Font {
                        size: LEGEND_FONT_SIZE,
                    },
                },
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub labels: LegendLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendLabels {
    pub color: String,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub size: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dataset_nulls_serialize() {
        let dataset = Dataset::new(vec![Some(5.0), None]).label("Real");
        let value = serde_json::to_value(&dataset).unwrap();
        assert_eq!(value, json!({"label": "Real", "data": [5.0, null]}));
    }

    #[test]
    fn test_chart_config_json_shape() {
        let config = ChartConfig {
            kind: ChartKind::Bar,
            data: ChartData {
                labels: vec!["Mon".to_string()],
                datasets: vec![Dataset::new(vec![Some(2.0)]).border_dash(vec![5, 5])],
            },
            options: ChartOptions::with_axes(10),
        };
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["type"], "bar");
        assert_eq!(value["data"]["datasets"][0]["borderDash"], json!([5, 5]));
        assert_eq!(value["options"]["scales"]["x"]["ticks"]["maxTicksLimit"], 10);
        assert_eq!(value["options"]["scales"]["x"]["ticks"]["autoSkip"], true);
        assert!(value["options"]["scales"]["y"]["ticks"].get("autoSkip").is_none());
        assert_eq!(value["options"]["plugins"]["legend"]["labels"]["color"], "#e5e7eb");
        assert_eq!(value["options"]["plugins"]["legend"]["labels"]["font"]["size"], 11);
    }

    #[test]
    fn test_legend_only_has_no_scales() {
        let value = serde_json::to_value(ChartOptions::legend_only()).unwrap();
        assert!(value.get("scales").is_none());
    }
}
