//! Runtime settings
//!
//! Defines the structure of the optional configuration file.

use reqwest::Client;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::client::{MonitorClient, MonitorError};

/// Public API endpoint used when nothing else is configured
pub const DEFAULT_API_URL: &str = "https://api.datadoghq.com";

/// Errors that can occur during configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Required environment variable {0} is not set")]
    MissingEnv(&'static str),

    #[error("Failed to create client: {0}")]
    Client(#[from] MonitorError),

    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Base URL of the monitoring API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Per-request timeout; the HTTP client default applies when unset
    #[serde(default, with = "humantime_serde")]
    pub timeout: Option<Duration>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout: None,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Replace the API base URL
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Create a client for the configured endpoint
    pub fn build_client(&self) -> Result<MonitorClient, ConfigError> {
        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(MonitorClient::with_client(&self.api_url, client)?)
    }
}
