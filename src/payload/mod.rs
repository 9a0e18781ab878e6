//! Dashboard Payload
//!
//! The structure served by the dashboard data endpoint. Every field is
//! optional on the wire: absent or `null` sequences become empty, absent
//! counts become zero. Nothing is validated beyond that.

mod types;

pub use types::{ActivityEntry, DashboardPayload, SolarReading, TaskCounts, TaskStatus};
