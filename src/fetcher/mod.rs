//! Dashboard Data Fetcher
//!
//! Retrieves one [`DashboardPayload`] per render pass.
//!
//! - [`HttpDataSource`]: GET against the configured data endpoint
//! - [`FileDataSource`]: payload stored in a local JSON file
//!
//! Failures never propagate past [`fetch_dashboard_data`]: they are logged
//! once and the caller gets `None`. There is no retry.

mod file;
mod http;

pub use file::FileDataSource;
pub use http::HttpDataSource;

use async_trait::async_trait;
use thiserror::Error;

use crate::payload::DashboardPayload;

/// Anything that can produce a dashboard payload
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Human-readable location, used in log entries
    fn describe(&self) -> String;

    /// Retrieve and parse the payload
    async fn fetch(&self) -> Result<DashboardPayload, FetchError>;
}

/// Errors that can occur while retrieving the payload
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request timeout")]
    Timeout,

    #[error("Endpoint unavailable: {0}")]
    Unavailable(String),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Fetch the payload, logging a single error entry on failure
pub async fn fetch_dashboard_data(source: &dyn DataSource) -> Option<DashboardPayload> {
    match source.fetch().await {
        Ok(payload) => {
            tracing::debug!(
                source = %source.describe(),
                solar = payload.solar.len(),
                forecast = payload.solar_forecast.len(),
                activity = payload.activity.len(),
                "Dashboard data received"
            );
            Some(payload)
        }
        Err(e) => {
            tracing::error!(source = %source.describe(), error = %e, "Dashboard data error");
            None
        }
    }
}
