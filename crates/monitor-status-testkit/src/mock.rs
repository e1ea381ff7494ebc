//! Mock monitoring API for unit testing
//!
//! Wraps an `httpmock` server with helpers that register the two endpoints
//! the lookup uses. Stubs only match requests that carry the expected
//! credential headers, so a request missing them falls through to the
//! server's default 404.

use httpmock::Method::GET;
use httpmock::{Mock, MockServer};
use serde_json::Value;

/// Header carrying the account API key
pub const API_KEY_HEADER: &str = "DD-API-KEY";
/// Header carrying the application key
pub const APP_KEY_HEADER: &str = "DD-APPLICATION-KEY";

/// Path of the monitor search endpoint
pub const SEARCH_PATH: &str = "/api/v1/monitor/search";
/// Path prefix of the monitor by-id endpoint
pub const MONITOR_PATH: &str = "/api/v1/monitor";

const TEST_API_KEY: &str = "test-api-key";
const TEST_APP_KEY: &str = "test-app-key";

/// Local stand-in for the monitoring API
pub struct MockMonitorApi {
    server: MockServer,
    api_key: String,
    app_key: String,
}

impl MockMonitorApi {
    /// Start a mock server expecting the default test credentials
    pub async fn start() -> Self {
        Self::start_with_keys(TEST_API_KEY, TEST_APP_KEY).await
    }

    /// Start a mock server expecting specific credentials
    pub async fn start_with_keys(api_key: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            server: MockServer::start_async().await,
            api_key: api_key.into(),
            app_key: app_key.into(),
        }
    }

    /// Base URL to hand to the client under test
    pub fn base_url(&self) -> String {
        self.server.base_url()
    }

    /// API key the stubs expect
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Application key the stubs expect
    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    /// Stub the search endpoint for `name` with a JSON body
    pub async fn stub_search(&self, name: &str, status: u16, body: Value) -> Mock<'_> {
        let query = format!("name:{name}");
        self.server
            .mock_async(|when, then| {
                when.method(GET)
                    .path(SEARCH_PATH)
                    .query_param("query", query)
                    .header("Content-Type", "application/json")
                    .header(API_KEY_HEADER, &self.api_key)
                    .header(APP_KEY_HEADER, &self.app_key);
                then.status(status)
                    .header("content-type", "application/json")
                    .json_body(body);
            })
            .await
    }

    /// Stub the search endpoint for `name` with a raw body
    pub async fn stub_search_raw(&self, name: &str, status: u16, body: &str) -> Mock<'_> {
        let query = format!("name:{name}");
        self.server
            .mock_async(|when, then| {
                when.method(GET)
                    .path(SEARCH_PATH)
                    .query_param("query", query)
                    .header(API_KEY_HEADER, &self.api_key)
                    .header(APP_KEY_HEADER, &self.app_key);
                then.status(status).body(body);
            })
            .await
    }

    /// Stub the by-id endpoint for `id` with a JSON body
    pub async fn stub_monitor(&self, id: &str, status: u16, body: Value) -> Mock<'_> {
        let path = format!("{MONITOR_PATH}/{id}");
        self.server
            .mock_async(|when, then| {
                when.method(GET)
                    .path(path)
                    .header("Content-Type", "application/json")
                    .header(API_KEY_HEADER, &self.api_key)
                    .header(APP_KEY_HEADER, &self.app_key);
                then.status(status)
                    .header("content-type", "application/json")
                    .json_body(body);
            })
            .await
    }

    /// Stub the by-id endpoint for `id` with a raw body
    pub async fn stub_monitor_raw(&self, id: &str, status: u16, body: &str) -> Mock<'_> {
        let path = format!("{MONITOR_PATH}/{id}");
        self.server
            .mock_async(|when, then| {
                when.method(GET)
                    .path(path)
                    .header(API_KEY_HEADER, &self.api_key)
                    .header(APP_KEY_HEADER, &self.app_key);
                then.status(status).body(body);
            })
            .await
    }
}
