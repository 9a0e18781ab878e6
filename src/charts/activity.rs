//! Employee activity bar chart

use super::{ChartConfig, ChartData, ChartKind, ChartOptions, Dataset};
use crate::payload::ActivityEntry;

pub const ACTIVITY_LABEL: &str = "Bajarilgan topshiriqlar";

const MAX_X_TICKS: u32 = 10;

/// Build the activity bar chart, or `None` when there is no activity
pub fn build_activity_chart(activity: &[ActivityEntry]) -> Option<ChartConfig> {
    if activity.is_empty() {
        return None;
    }

    let labels = activity.iter().map(|entry| entry.day.clone()).collect();
    let values = activity
        .iter()
        .map(|entry| entry.completed_tasks)
        .collect();

    Some(ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels,
            datasets: vec![Dataset::new(values).label(ACTIVITY_LABEL)],
        },
        options: ChartOptions::with_axes(MAX_X_TICKS),
    })
}
