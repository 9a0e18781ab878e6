//! # Dashboard Charts
//!
//! Fetches the dashboard metrics payload (task status counts, solar energy
//! readings and forecast, employee activity) and turns it into Chart.js
//! charts bound to named regions of a page.
//!
//! ## Modules
//!
//! - [`payload`]: The fetched data structure, with defaulting for missing fields
//! - [`fetcher`]: Data sources (HTTP endpoint, local file)
//! - [`charts`]: Status, solar and activity chart builders
//! - [`page`]: Region lookup and chart construction seams, static HTML page
//! - [`renderer`]: One-shot fetch-then-render orchestration
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dashboard_charts::{page_ready, Config, DashboardRenderer, StaticPage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (config, _) = Config::load_default()?;
//!     let renderer = DashboardRenderer::from_config(&config.renderer)?;
//!
//!     let mut page = StaticPage::new(config.page.title.clone(), config.page.regions.clone());
//!     let (signal, ready) = page_ready();
//!     signal.fire();
//!
//!     let report = renderer.run_when_ready(ready, &mut page).await;
//!     println!("Rendered {} charts", report.chart_count());
//!
//!     std::fs::write(&config.page.output, page.to_html()?)?;
//!     Ok(())
//! }
//! ```

pub mod charts;
pub mod config;
pub mod fetcher;
pub mod page;
pub mod payload;
pub mod renderer;

// Re-export top-level types for convenience
pub use payload::{ActivityEntry, DashboardPayload, SolarReading, TaskCounts, TaskStatus};

pub use fetcher::{fetch_dashboard_data, DataSource, FetchError, FileDataSource, HttpDataSource};

pub use charts::{
    build_activity_chart, build_solar_chart, build_status_chart, ChartConfig, ChartKind, Dataset,
};

pub use page::{
    first_region, region_ids, ChartSurface, DisplayRegions, Page, Region, RenderError, StaticPage,
};

pub use renderer::{
    page_ready, render_payload, ChartSlot, DashboardRenderer, PageReady, ReadySignal,
    RenderOutcome, RenderReport, RenderedChart,
};

pub use config::{
    generate_default_config, Config, ConfigError, LoggingConfig, PageConfig, RendererConfig,
};
