//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::page::{region_ids, DEFAULT_CHART_JS_URL};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub renderer: RendererConfig,

    #[serde(default)]
    pub page: PageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Data endpoint configuration
///
/// Without a `data_url` the renderer is inert.
#[derive(Debug, Clone, Deserialize)]
pub struct RendererConfig {
    #[serde(default)]
    pub data_url: Option<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

fn default_request_timeout() -> u64 {
    10_000
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            data_url: None,
            request_timeout_ms: default_request_timeout(),
        }
    }
}

/// Rendered page configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_title")]
    pub title: String,

    /// Region ids present on the page, in layout order
    #[serde(default = "default_regions")]
    pub regions: Vec<String>,

    #[serde(default = "default_chart_js_url")]
    pub chart_js_url: String,

    #[serde(default = "default_output")]
    pub output: String,
}

fn default_title() -> String {
    "Dashboard".to_string()
}

fn default_regions() -> Vec<String> {
    region_ids::ALL.iter().map(|id| id.to_string()).collect()
}

fn default_chart_js_url() -> String {
    DEFAULT_CHART_JS_URL.to_string()
}

fn default_output() -> String {
    "dashboard.html".to_string()
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            regions: default_regions(),
            chart_js_url: default_chart_js_url(),
            output: default_output(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Config file locations searched by [`Config::load_default`], in order
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("dashboard-charts").join("config.toml"));
        }
        paths.push(PathBuf::from("./dashboard.toml"));
        paths
    }

    /// Load from default locations or environment
    ///
    /// Returns the file that was used, if any. A file that exists but fails
    /// to load is an error rather than a silent fallback to defaults.
    pub fn load_default() -> Result<(Self, Option<PathBuf>), ConfigError> {
        Self::load_first(&Self::default_paths())
    }

    /// Load the first existing file among `paths`, else environment only
    pub fn load_first(paths: &[PathBuf]) -> Result<(Self, Option<PathBuf>), ConfigError> {
        match paths.iter().find(|path| path.exists()) {
            Some(path) => Ok((Self::load_with_env(path)?, Some(path.clone()))),
            None => Ok((Self::from_env(), None)),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from a variable lookup
    fn apply_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = var("DASHBOARD_DATA_URL") {
            self.renderer.data_url = if url.is_empty() { None } else { Some(url) };
        }
        if let Some(timeout) = var("DASHBOARD_REQUEST_TIMEOUT_MS") {
            if let Ok(ms) = timeout.parse() {
                self.renderer.request_timeout_ms = ms;
            }
        }

        if let Some(level) = var("DASHBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("DASHBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Dashboard Charts Configuration
#
# Environment variables override these settings:
# - DASHBOARD_DATA_URL
# - DASHBOARD_REQUEST_TIMEOUT_MS
# - DASHBOARD_LOG_LEVEL
# - DASHBOARD_LOG_FORMAT

[renderer]
# Dashboard data endpoint. Leave unset to disable fetching.
# data_url = "http://localhost:5000/api/dashboard-data"

# Request timeout in milliseconds
request_timeout_ms = 10000

[page]
title = "Dashboard"

# Chart regions on the page
regions = ["tasksStatusChart", "solarChart", "solarChartPage", "activityHeatmap", "activityHeatmapPage"]

chart_js_url = "https://cdn.jsdelivr.net/npm/chart.js"

# Where the rendered page is written
output = "dashboard.html"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
