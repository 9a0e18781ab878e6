//! Display Regions
//!
//! The page a dashboard renders into, reduced to two capabilities:
//! looking up a named region ([`DisplayRegions`]) and constructing a chart
//! bound to a region ([`ChartSurface`]). A missing region is not an error;
//! the matching chart is simply skipped.

mod html;

pub use html::{StaticPage, DEFAULT_CHART_JS_URL};

use thiserror::Error;

use crate::charts::ChartConfig;

/// Region ids the dashboard knows about
pub mod region_ids {
    /// Task status doughnut on the dashboard
    pub const TASKS_STATUS: &str = "tasksStatusChart";
    /// Solar chart on the dashboard summary
    pub const SOLAR: &str = "solarChart";
    /// Solar chart on the dedicated solar page
    pub const SOLAR_PAGE: &str = "solarChartPage";
    /// Activity chart on the dashboard summary
    pub const ACTIVITY: &str = "activityHeatmap";
    /// Activity chart on the dedicated activity page
    pub const ACTIVITY_PAGE: &str = "activityHeatmapPage";

    pub const ALL: [&str; 5] = [TASKS_STATUS, SOLAR, SOLAR_PAGE, ACTIVITY, ACTIVITY_PAGE];
}

/// Handle to a named placeholder on the page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region {
    id: String,
}

impl Region {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Look up a region by name
pub trait DisplayRegions {
    fn region(&self, id: &str) -> Option<Region>;
}

/// Construct a chart instance bound to a region
pub trait ChartSurface {
    fn render_chart(&mut self, region: &Region, chart: ChartConfig) -> Result<(), RenderError>;
}

/// A page offering both capabilities
pub trait Page: DisplayRegions + ChartSurface {}

impl<T: DisplayRegions + ChartSurface + ?Sized> Page for T {}

/// First region present among `ids`, in order of preference
pub fn first_region<R: DisplayRegions + ?Sized>(regions: &R, ids: &[&str]) -> Option<Region> {
    ids.iter().find_map(|id| regions.region(id))
}

/// Errors raised while constructing a chart
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Region not on page: {0}")]
    UnknownRegion(String),

    #[error("Region already holds a chart: {0}")]
    RegionInUse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
