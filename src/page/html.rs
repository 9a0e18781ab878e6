//! Static HTML page
//!
//! Holds a declared set of canvas regions, records the charts constructed
//! on them and renders a self-contained document that builds each chart
//! with Chart.js when the browser loads it.

use chrono::Utc;

use super::{ChartSurface, DisplayRegions, Region, RenderError};
use crate::charts::ChartConfig;

/// Chart.js bundle loaded by rendered pages
pub const DEFAULT_CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js";

/// In-memory page rendered to HTML
#[derive(Debug, Clone)]
pub struct StaticPage {
    title: String,
    chart_js_url: String,
    regions: Vec<String>,
    charts: Vec<(Region, ChartConfig)>,
}

impl StaticPage {
    /// Create a page exposing the given region ids, in layout order
    pub fn new<I, S>(title: impl Into<String>, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ids: Vec<String> = Vec::new();
        for id in regions {
            let id = id.into();
            if !ids.contains(&id) {
                ids.push(id);
            }
        }

        Self {
            title: title.into(),
            chart_js_url: DEFAULT_CHART_JS_URL.to_string(),
            regions: ids,
            charts: Vec::new(),
        }
    }

    /// Override where the Chart.js bundle is loaded from
    pub fn chart_js_url(mut self, url: impl Into<String>) -> Self {
        self.chart_js_url = url.into();
        self
    }

    /// Charts constructed so far, in construction order
    pub fn charts(&self) -> &[(Region, ChartConfig)] {
        &self.charts
    }

    /// Chart bound to a region, if any
    pub fn chart(&self, id: &str) -> Option<&ChartConfig> {
        self.charts
            .iter()
            .find(|(region, _)| region.id() == id)
            .map(|(_, chart)| chart)
    }

    /// Render the complete HTML document
    pub fn to_html(&self) -> Result<String, RenderError> {
        let mut canvases = String::new();
        for id in &self.regions {
            canvases.push_str(&format!(
                "    <section class=\"chart\"><canvas id=\"{}\"></canvas></section>\n",
                escape_html(id)
            ));
        }

        let mut scripts = String::new();
        for (region, chart) in &self.charts {
            scripts.push_str(&format!(
                "    new Chart(document.getElementById({}), {});\n",
                script_json(&serde_json::to_string(region.id())?),
                script_json(&chart.to_json()?)
            ));
        }

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="uz">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <script src="{chart_js}"></script>
  <style>
    body {{ background: #111827; color: #e5e7eb; font-family: sans-serif; }}
    .chart {{ max-width: 720px; margin: 1.5rem auto; }}
  </style>
</head>
<body>
  <h1>{title}</h1>
{canvases}  <footer>Generated {generated}</footer>
  <script>
  document.addEventListener("DOMContentLoaded", function () {{
{scripts}  }});
  </script>
</body>
</html>
"#,
            title = escape_html(&self.title),
            chart_js = escape_html(&self.chart_js_url),
            canvases = canvases,
            generated = Utc::now().format("%Y-%m-%d %H:%M UTC"),
            scripts = scripts,
        ))
    }
}

impl DisplayRegions for StaticPage {
    fn region(&self, id: &str) -> Option<Region> {
        self.regions
            .iter()
            .any(|r| r == id)
            .then(|| Region::new(id))
    }
}

impl ChartSurface for StaticPage {
    fn render_chart(&mut self, region: &Region, chart: ChartConfig) -> Result<(), RenderError> {
        if !self.regions.iter().any(|r| r == region.id()) {
            return Err(RenderError::UnknownRegion(region.id().to_string()));
        }
        if self.chart(region.id()).is_some() {
            return Err(RenderError::RegionInUse(region.id().to_string()));
        }

        tracing::debug!(region = region.id(), kind = %chart.kind, "Chart constructed");
        self.charts.push((region.clone(), chart));
        Ok(())
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Keep serialized JSON from closing the surrounding script element
fn script_json(json: &str) -> String {
    json.replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}
