//! HTTP data source

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::{DataSource, FetchError};
use crate::payload::DashboardPayload;

/// Fetches the payload with a single GET to the data endpoint
pub struct HttpDataSource {
    client: Client,
    url: String,
}

impl HttpDataSource {
    /// Create a source for `url` with the given request timeout
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<DashboardPayload, FetchError> {
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else if e.is_connect() {
                FetchError::Unavailable(e.to_string())
            } else {
                FetchError::Request(e)
            }
        })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(DashboardPayload::from_json(&body)?)
    }
}
