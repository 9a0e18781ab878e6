//! Dashboard Charts CLI
//!
//! Renders the dashboard into a static HTML page:
//! - Fetch the payload from the data endpoint (or a local file)
//! - Build the charts for the regions the page declares
//! - Write the page

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dashboard_charts::{
    generate_default_config, page_ready, Config, DashboardRenderer, DataSource, FileDataSource,
    LoggingConfig, RenderOutcome, StaticPage,
};

#[derive(Parser)]
#[command(name = "dashboard-charts")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render task, solar and activity charts from the dashboard data endpoint")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the dashboard data and write the chart page
    Render {
        /// Data endpoint URL (overrides config)
        #[arg(long, conflicts_with = "payload")]
        url: Option<String>,
        /// Read the payload from a JSON file instead of the endpoint
        #[arg(long)]
        payload: Option<PathBuf>,
        /// Regions on the page, comma-separated (overrides config)
        #[arg(long, value_delimiter = ',')]
        regions: Option<Vec<String>>,
        /// Output file, "-" for stdout (overrides config)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }

        Commands::Render {
            url,
            payload,
            regions,
            output,
        } => {
            let (mut config, config_path) = match &cli.config {
                Some(path) => (Config::load_with_env(path)?, Some(path.clone())),
                None => Config::load_default()?,
            };
            init_logging(&config.logging);

            match &config_path {
                Some(path) => tracing::info!("Loaded config from {:?}", path),
                None => tracing::info!("Using default config with environment overrides"),
            }

            if let Some(url) = url {
                config.renderer.data_url = Some(url);
            }
            if let Some(regions) = regions {
                config.page.regions = regions;
            }
            if let Some(output) = output {
                config.page.output = output;
            }

            let renderer = match payload {
                Some(path) => {
                    let file = Arc::new(FileDataSource::new(path)) as Arc<dyn DataSource>;
                    DashboardRenderer::new(Some(file))
                }
                None => DashboardRenderer::from_config(&config.renderer)?,
            };

            if let Some(source) = renderer.source_description() {
                tracing::info!("Dashboard data source: {}", source);
            }

            let mut page = StaticPage::new(config.page.title.clone(), config.page.regions.clone())
                .chart_js_url(config.page.chart_js_url.clone());

            let (signal, ready) = page_ready();
            signal.fire();
            let report = renderer.run_when_ready(ready, &mut page).await;

            match report.outcome {
                RenderOutcome::Inert => {
                    tracing::info!("No data source configured, nothing fetched")
                }
                RenderOutcome::FetchFailed => {
                    tracing::warn!("Dashboard data unavailable, page has no charts")
                }
                RenderOutcome::Rendered => {
                    for chart in &report.rendered {
                        tracing::info!("{:?} chart ({}) in #{}", chart.slot, chart.kind, chart.region);
                    }
                }
            }

            let html = page.to_html()?;
            if config.page.output == "-" {
                print!("{}", html);
            } else {
                std::fs::write(&config.page.output, html)
                    .with_context(|| format!("writing {}", config.page.output))?;
                tracing::info!("Page written to {}", config.page.output);
            }
        }
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("dashboard_charts={}", logging.level))
    });

    // Logs go to stderr so `--output -` keeps stdout clean
    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
