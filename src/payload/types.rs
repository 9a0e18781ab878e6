//! Payload types
//!
//! Request-scoped values read once per render pass.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Metrics snapshot fetched from the dashboard data endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardPayload {
    /// Task counts keyed by status name
    #[serde(default, deserialize_with = "null_as_default")]
    pub task_counts: TaskCounts,

    /// Historical solar readings, oldest first
    #[serde(default, deserialize_with = "null_as_default")]
    pub solar: Vec<SolarReading>,

    /// Predicted solar readings continuing after `solar`
    #[serde(default, deserialize_with = "null_as_default")]
    pub solar_forecast: Vec<SolarReading>,

    /// Completed tasks per day
    #[serde(default, deserialize_with = "null_as_default")]
    pub activity: Vec<ActivityEntry>,
}

impl DashboardPayload {
    /// Parse a payload from a JSON document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Task status in the fixed order used by the status chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    New,
    InProgress,
    Review,
    Done,
}

impl TaskStatus {
    /// All statuses in chart order
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::New,
        TaskStatus::InProgress,
        TaskStatus::Review,
        TaskStatus::Done,
    ];

    /// Key used in the `task_counts` mapping
    pub fn key(&self) -> &'static str {
        match self {
            TaskStatus::New => "new",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Review => "review",
            TaskStatus::Done => "done",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Mapping from status name to task count
///
/// Keys outside [`TaskStatus::ALL`] are kept but never charted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskCounts(HashMap<String, Option<i64>>);

impl TaskCounts {
    /// Count for a status, 0 when absent or null
    pub fn count(&self, status: TaskStatus) -> i64 {
        self.0.get(status.key()).copied().flatten().unwrap_or(0)
    }

    /// Set the count for a status
    pub fn with(mut self, status: TaskStatus, count: i64) -> Self {
        self.0.insert(status.key().to_string(), Some(count));
        self
    }
}

/// One day of solar energy production
///
/// A missing or `null` reading is kept as a gap rather than rejecting the
/// whole payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarReading {
    pub day: String,

    #[serde(default)]
    pub energy_kwh: Option<f64>,
}

impl SolarReading {
    pub fn new(day: impl Into<String>, energy_kwh: f64) -> Self {
        Self {
            day: day.into(),
            energy_kwh: Some(energy_kwh),
        }
    }
}

/// Completed tasks for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub day: String,

    /// Any JSON number; missing or `null` becomes a gap in the bar chart
    #[serde(default)]
    pub completed_tasks: Option<f64>,

    /// Employee the entry belongs to, if the producer sends it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

impl ActivityEntry {
    pub fn new(day: impl Into<String>, completed_tasks: u32) -> Self {
        Self {
            day: day.into(),
            completed_tasks: Some(f64::from(completed_tasks)),
            user_id: None,
        }
    }
}

/// Treat an explicit JSON `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
