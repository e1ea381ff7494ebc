//! Monitoring HTTP API Client
//!
//! Provides a typed client for the monitor search and by-id endpoints.
//! Every request carries the caller's API and application keys.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;
use url::Url;

use super::types::*;
use crate::config::Credentials;

/// Header carrying the account API key
pub const API_KEY_HEADER: &str = "DD-API-KEY";
/// Header carrying the application key
pub const APP_KEY_HEADER: &str = "DD-APPLICATION-KEY";

const SEARCH_PATH: &str = "api/v1/monitor/search";
const MONITOR_PATH: &str = "api/v1/monitor";

/// Errors that can occur when talking to the monitoring API
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Unexpected HTTP status {status}")]
    Status { status: u16 },

    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Result type for monitoring API operations
pub type MonitorResult<T> = Result<T, MonitorError>;

/// The monitoring API operations the lookup depends on
#[async_trait]
pub trait MonitorApi: Send + Sync {
    /// Search monitors by name; results may include partial matches
    async fn search(
        &self,
        credentials: &Credentials,
        name: &str,
    ) -> MonitorResult<Vec<MonitorSummary>>;

    /// Fetch a single monitor by id
    async fn monitor(&self, credentials: &Credentials, id: &MonitorId)
    -> MonitorResult<MonitorDetail>;
}

/// Client for the monitoring service's HTTP API
///
/// # Example
/// ```no_run
/// use monitor_status::client::{MonitorApi, MonitorClient};
/// use monitor_status::config::Credentials;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = MonitorClient::new("https://api.datadoghq.com")?;
/// let credentials = Credentials::new("api-key", "app-key");
/// let found = client.search(&credentials, "cpu-alert").await?;
/// println!("{} candidates", found.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MonitorClient {
    /// Base URL of the API, always ending in `/`
    base_url: Url,
    client: Client,
}

impl MonitorClient {
    /// Create a client for the given API base URL
    pub fn new(api_url: &str) -> MonitorResult<Self> {
        Self::with_client(api_url, Client::new())
    }

    /// Create a client with a custom HTTP client
    pub fn with_client(api_url: &str, client: Client) -> MonitorResult<Self> {
        let base_url = parse_base_url(api_url)?;
        Ok(Self { base_url, client })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET /api/v1/monitor/search?query=name:<name>
    fn search_url(&self, name: &str) -> MonitorResult<Url> {
        let mut url = self.base_url.join(SEARCH_PATH)?;
        url.query_pairs_mut()
            .append_pair("query", &format!("name:{name}"));
        Ok(url)
    }

    /// GET /api/v1/monitor/<id>
    fn monitor_url(&self, id: &MonitorId) -> MonitorResult<Url> {
        let mut url = self.base_url.join(MONITOR_PATH)?;
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .push(&id.to_string());
        Ok(url)
    }

    /// Issue an authenticated GET and decode a 200 response body
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        credentials: &Credentials,
    ) -> MonitorResult<T> {
        debug!(url = %url, "Sending request");

        let response = self
            .client
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, credentials.api_key())
            .header(APP_KEY_HEADER, credentials.app_key())
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(MonitorError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl MonitorApi for MonitorClient {
    async fn search(
        &self,
        credentials: &Credentials,
        name: &str,
    ) -> MonitorResult<Vec<MonitorSummary>> {
        let url = self.search_url(name)?;
        let response: SearchResponse = self.get_json(url, credentials).await?;
        Ok(response.into_monitors())
    }

    async fn monitor(
        &self,
        credentials: &Credentials,
        id: &MonitorId,
    ) -> MonitorResult<MonitorDetail> {
        let url = self.monitor_url(id)?;
        self.get_json(url, credentials).await
    }
}

/// Parse an API base URL so relative endpoint paths append to it
fn parse_base_url(api_url: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(api_url)?;
    if url.cannot_be_a_base() {
        return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase);
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
