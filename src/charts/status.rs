//! Task status doughnut

use super::{ChartConfig, ChartData, ChartKind, ChartOptions, Dataset};
use crate::payload::{TaskCounts, TaskStatus};

/// Display labels, matched to [`TaskStatus::ALL`] by position
pub const STATUS_LABELS: [&str; 4] = ["Yangi", "Jarayonda", "Ko'rib chiqishda", "Bajarilgan"];

/// Build the status doughnut. Always produces a chart, even with no counts.
pub fn build_status_chart(counts: &TaskCounts) -> ChartConfig {
    let values = TaskStatus::ALL
        .iter()
        .map(|status| Some(counts.count(*status) as f64))
        .collect();

    ChartConfig {
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels: STATUS_LABELS.iter().map(|l| l.to_string()).collect(),
            datasets: vec![Dataset::new(values).border_width(0)],
        },
        options: ChartOptions::legend_only(),
    }
}
