//! Dashboard Renderer
//!
//! Runs one render pass: wait for the page to be ready, fetch the payload
//! once, then build the status, solar and activity charts in that order.
//! Each chart is guarded by its own region and data checks, so a missing
//! region or a failed construction never blocks the others.
//!
//! Without a data source the renderer is inert: no fetch, no charts.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;

use crate::charts::{
    build_activity_chart, build_solar_chart, build_status_chart, ChartConfig, ChartKind,
};
use crate::config::RendererConfig;
use crate::fetcher::{fetch_dashboard_data, DataSource, FetchError, HttpDataSource};
use crate::page::{first_region, region_ids, Page, Region};
use crate::payload::DashboardPayload;

/// Regions tried for the solar chart, page-specific first
const SOLAR_REGIONS: [&str; 2] = [region_ids::SOLAR_PAGE, region_ids::SOLAR];

/// Regions tried for the activity chart, page-specific first
const ACTIVITY_REGIONS: [&str; 2] = [region_ids::ACTIVITY_PAGE, region_ids::ACTIVITY];

/// Which of the dashboard charts a rendered chart is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartSlot {
    Status,
    Solar,
    Activity,
}

/// A chart successfully constructed on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedChart {
    pub slot: ChartSlot,
    pub region: String,
    pub kind: ChartKind,
}

/// How a render pass ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// No data source configured, or the page never became ready
    Inert,
    /// The payload could not be retrieved; nothing was rendered
    FetchFailed,
    /// Payload arrived and every available chart was attempted
    Rendered,
}

/// Summary of a render pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub outcome: RenderOutcome,
    pub rendered: Vec<RenderedChart>,
}

impl RenderReport {
    fn empty(outcome: RenderOutcome) -> Self {
        Self {
            outcome,
            rendered: Vec::new(),
        }
    }

    pub fn chart_count(&self) -> usize {
        self.rendered.len()
    }

    pub fn has(&self, slot: ChartSlot) -> bool {
        self.rendered.iter().any(|c| c.slot == slot)
    }
}

/// Create the one-shot "page ready" signal pair
pub fn page_ready() -> (ReadySignal, PageReady) {
    let (tx, rx) = oneshot::channel();
    (ReadySignal(tx), PageReady(rx))
}

/// Sending half, fired once by the host when the page structure is loaded
#[derive(Debug)]
pub struct ReadySignal(oneshot::Sender<()>);

impl ReadySignal {
    pub fn fire(self) {
        // The renderer may already be gone; nothing to do then.
        let _ = self.0.send(());
    }
}

/// Receiving half awaited by [`DashboardRenderer::run_when_ready`]
#[derive(Debug)]
pub struct PageReady(oneshot::Receiver<()>);

/// Orchestrates fetching and chart construction
pub struct DashboardRenderer {
    source: Option<Arc<dyn DataSource>>,
}

impl DashboardRenderer {
    /// Create a renderer; `None` makes it inert
    pub fn new(source: Option<Arc<dyn DataSource>>) -> Self {
        Self { source }
    }

    /// Create a renderer fetching from the configured data URL, if any
    pub fn from_config(config: &RendererConfig) -> Result<Self, FetchError> {
        let source = match &config.data_url {
            Some(url) => {
                let http = HttpDataSource::new(
                    url.clone(),
                    Duration::from_millis(config.request_timeout_ms),
                )?;
                Some(Arc::new(http) as Arc<dyn DataSource>)
            }
            None => None,
        };
        Ok(Self::new(source))
    }

    pub fn is_inert(&self) -> bool {
        self.source.is_none()
    }

    /// Where the payload comes from, if a source is configured
    pub fn source_description(&self) -> Option<String> {
        self.source.as_ref().map(|source| source.describe())
    }

    /// Wait for the page to be ready, then render once
    pub async fn run_when_ready<P>(&self, ready: PageReady, page: &mut P) -> RenderReport
    where
        P: Page + ?Sized,
    {
        if self.is_inert() {
            tracing::debug!("No dashboard data URL configured, renderer inert");
            return RenderReport::empty(RenderOutcome::Inert);
        }

        if ready.0.await.is_err() {
            tracing::debug!("Page ready signal dropped before firing");
            return RenderReport::empty(RenderOutcome::Inert);
        }

        self.render(page).await
    }

    /// Fetch the payload and build every chart the page has room for
    pub async fn render<P>(&self, page: &mut P) -> RenderReport
    where
        P: Page + ?Sized,
    {
        let source = match &self.source {
            Some(source) => source,
            None => return RenderReport::empty(RenderOutcome::Inert),
        };

        match fetch_dashboard_data(source.as_ref()).await {
            Some(payload) => RenderReport {
                outcome: RenderOutcome::Rendered,
                rendered: render_payload(&payload, page),
            },
            None => RenderReport::empty(RenderOutcome::FetchFailed),
        }
    }
}

/// Build the dashboard charts from an already fetched payload
pub fn render_payload<P>(payload: &DashboardPayload, page: &mut P) -> Vec<RenderedChart>
where
    P: Page + ?Sized,
{
    let mut rendered = Vec::new();

    if let Some(region) = page.region(region_ids::TASKS_STATUS) {
        let chart = build_status_chart(&payload.task_counts);
        rendered.extend(construct(page, ChartSlot::Status, &region, chart));
    }

    if let Some(region) = first_region(&*page, &SOLAR_REGIONS) {
        let chart = build_solar_chart(&payload.solar, &payload.solar_forecast);
        rendered.extend(construct(page, ChartSlot::Solar, &region, chart));
    }

    if let Some(region) = first_region(&*page, &ACTIVITY_REGIONS) {
        if let Some(chart) = build_activity_chart(&payload.activity) {
            rendered.extend(construct(page, ChartSlot::Activity, &region, chart));
        }
    }

    tracing::info!(charts = rendered.len(), "Dashboard charts rendered");
    rendered
}

fn construct<P>(
    page: &mut P,
    slot: ChartSlot,
    region: &Region,
    chart: ChartConfig,
) -> Option<RenderedChart>
where
    P: Page + ?Sized,
{
    let kind = chart.kind;
    match page.render_chart(region, chart) {
        Ok(()) => Some(RenderedChart {
            slot,
            region: region.id().to_string(),
            kind,
        }),
        Err(e) => {
            tracing::warn!(region = region.id(), error = %e, "Failed to construct chart");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::testing::StubSource;
    use crate::page::{ChartSurface, DisplayRegions, RenderError, StaticPage};
    use crate::payload::{ActivityEntry, SolarReading, TaskCounts, TaskStatus};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// Counts ERROR level events
    struct ErrorCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for ErrorCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn full_payload() -> DashboardPayload {
        DashboardPayload {
            task_counts: TaskCounts::default().with(TaskStatus::Done, 3),
            solar: vec![SolarReading::new("Mon", 5.0)],
            solar_forecast: vec![SolarReading::new("Tue", 7.0)],
            activity: vec![ActivityEntry::new("Mon", 4)],
        }
    }

    fn renderer(source: Arc<StubSource>) -> DashboardRenderer {
        DashboardRenderer::new(Some(source as Arc<dyn DataSource>))
    }

    fn dashboard_page() -> StaticPage {
        StaticPage::new(
            "Dashboard",
            [region_ids::TASKS_STATUS, region_ids::SOLAR, region_ids::ACTIVITY],
        )
    }

    #[tokio::test]
    async fn test_renders_all_charts_in_order() {
        let source = Arc::new(StubSource::ok(full_payload()));
        let mut page = dashboard_page();

        let report = renderer(source.clone()).render(&mut page).await;

        assert_eq!(report.outcome, RenderOutcome::Rendered);
        let slots: Vec<ChartSlot> = report.rendered.iter().map(|c| c.slot).collect();
        assert_eq!(slots, vec![ChartSlot::Status, ChartSlot::Solar, ChartSlot::Activity]);
        assert_eq!(page.charts().len(), 3);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_status_values_reach_page() {
        let source = Arc::new(StubSource::ok(full_payload()));
        let mut page = dashboard_page();
        renderer(source).render(&mut page).await;

        let chart = page.chart(region_ids::TASKS_STATUS).unwrap();
        assert_eq!(
            chart.data.datasets[0].data,
            vec![Some(0.0), Some(0.0), Some(0.0), Some(3.0)]
        );
    }

    #[tokio::test]
    async fn test_page_regions_take_precedence() {
        let source = Arc::new(StubSource::ok(full_payload()));
        let mut page = StaticPage::new(
            "Solar",
            [
                region_ids::SOLAR,
                region_ids::SOLAR_PAGE,
                region_ids::ACTIVITY,
                region_ids::ACTIVITY_PAGE,
            ],
        );

        let report = renderer(source).render(&mut page).await;

        let regions: Vec<&str> = report.rendered.iter().map(|c| c.region.as_str()).collect();
        assert_eq!(regions, vec!["solarChartPage", "activityHeatmapPage"]);
        assert!(page.chart(region_ids::SOLAR).is_none());
    }

    #[tokio::test]
    async fn test_missing_regions_skip_charts() {
        let source = Arc::new(StubSource::ok(full_payload()));
        let mut page = StaticPage::new("Solar", [region_ids::SOLAR]);

        let report = renderer(source).render(&mut page).await;

        assert_eq!(report.outcome, RenderOutcome::Rendered);
        assert_eq!(report.chart_count(), 1);
        assert!(report.has(ChartSlot::Solar));
    }

    #[tokio::test]
    async fn test_empty_payload_skips_only_activity() {
        let source = Arc::new(StubSource::ok(DashboardPayload::default()));
        let mut page = dashboard_page();

        let report = renderer(source).render(&mut page).await;

        assert!(report.has(ChartSlot::Status));
        assert!(report.has(ChartSlot::Solar));
        assert!(!report.has(ChartSlot::Activity));
        assert!(page.chart(region_ids::ACTIVITY).is_none());
    }

    #[tokio::test]
    async fn test_fetch_failure_renders_nothing_and_logs_once() {
        let errors = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(ErrorCounter(errors.clone()));
        let _guard = tracing::subscriber::set_default(subscriber);

        let source = Arc::new(StubSource::failing());
        let mut page = dashboard_page();
        let report = renderer(source).render(&mut page).await;

        assert_eq!(report.outcome, RenderOutcome::FetchFailed);
        assert!(page.charts().is_empty());
        assert_eq!(errors.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_inert_without_source() {
        let (signal, ready) = page_ready();
        signal.fire();

        let mut page = dashboard_page();
        let report = DashboardRenderer::new(None)
            .run_when_ready(ready, &mut page)
            .await;

        assert_eq!(report.outcome, RenderOutcome::Inert);
        assert!(page.charts().is_empty());
    }

    #[tokio::test]
    async fn test_inert_config_makes_no_request() {
        let renderer = DashboardRenderer::from_config(&RendererConfig::default()).unwrap();
        assert!(renderer.is_inert());
        assert!(renderer.source_description().is_none());

        let mut page = dashboard_page();
        let report = renderer.render(&mut page).await;
        assert_eq!(report.outcome, RenderOutcome::Inert);
    }

    #[tokio::test]
    async fn test_waits_for_ready_signal() {
        let source = Arc::new(StubSource::ok(full_payload()));
        let renderer = renderer(source.clone());
        let (signal, ready) = page_ready();

        let task = tokio::spawn(async move {
            let mut page = dashboard_page();
            renderer.run_when_ready(ready, &mut page).await
        });

        tokio::task::yield_now().await;
        assert_eq!(source.calls(), 0);

        signal.fire();
        let report = task.await.unwrap();
        assert_eq!(report.outcome, RenderOutcome::Rendered);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_dropped_ready_signal_is_inert() {
        let source = Arc::new(StubSource::ok(full_payload()));
        let (signal, ready) = page_ready();
        drop(signal);

        let mut page = dashboard_page();
        let report = renderer(source.clone()).run_when_ready(ready, &mut page).await;

        assert_eq!(report.outcome, RenderOutcome::Inert);
        assert_eq!(source.calls(), 0);
    }

    /// Page whose status region rejects every chart
    struct BrokenStatusPage {
        inner: StaticPage,
    }

    impl DisplayRegions for BrokenStatusPage {
        fn region(&self, id: &str) -> Option<Region> {
            self.inner.region(id)
        }
    }

    impl ChartSurface for BrokenStatusPage {
        fn render_chart(&mut self, region: &Region, chart: ChartConfig) -> Result<(), RenderError> {
            if region.id() == region_ids::TASKS_STATUS {
                return Err(RenderError::RegionInUse(region.id().to_string()));
            }
            self.inner.render_chart(region, chart)
        }
    }

    #[tokio::test]
    async fn test_failed_chart_does_not_block_others() {
        let source = Arc::new(StubSource::ok(full_payload()));
        let mut page = BrokenStatusPage {
            inner: dashboard_page(),
        };

        let report = renderer(source).render(&mut page).await;

        assert!(!report.has(ChartSlot::Status));
        assert!(report.has(ChartSlot::Solar));
        assert!(report.has(ChartSlot::Activity));
        assert_eq!(page.inner.charts().len(), 2);
    }

    #[tokio::test]
    async fn test_from_config_fetches_over_http() {
        use axum::{routing::get, Router};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let router = Router::new().route(
            "/api/dashboard-data",
            get(|| async {
                r#"{"solar": [{"day": "Mon", "energy_kwh": 5}],
                    "solar_forecast": [{"day": "Tue", "energy_kwh": 7}]}"#
            }),
        );
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let config = RendererConfig {
            data_url: Some(format!("http://{}/api/dashboard-data", addr)),
            request_timeout_ms: 5_000,
        };
        let renderer = DashboardRenderer::from_config(&config).unwrap();
        assert_eq!(renderer.source_description(), config.data_url.clone());
        let mut page = StaticPage::new("Solar", [region_ids::SOLAR_PAGE]);

        let report = renderer.render(&mut page).await;

        assert_eq!(report.outcome, RenderOutcome::Rendered);
        let chart = page.chart(region_ids::SOLAR_PAGE).unwrap();
        assert_eq!(chart.data.labels, vec!["Mon", "Tue"]);
        assert_eq!(chart.data.datasets[0].data, vec![Some(5.0), None]);
        assert_eq!(chart.data.datasets[1].data, vec![None, Some(7.0)]);
    }
}
