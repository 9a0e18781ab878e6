//! File data source for offline rendering

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::{DataSource, FetchError};
use crate::payload::DashboardPayload;

/// Reads the payload from a JSON file on disk
pub struct FileDataSource {
    path: PathBuf,
}

impl FileDataSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl DataSource for FileDataSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<DashboardPayload, FetchError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(DashboardPayload::from_json(&content)?)
    }
}
