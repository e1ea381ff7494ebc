//! Monitor Status Test Kit
//!
//! Test infrastructure for exercising the monitor lookup against a
//! local stand-in for the monitoring API.
//!
//! This crate provides:
//! - A mock HTTP server that serves the search and by-id endpoints
//! - JSON fixture builders for search and detail payloads
//!
//! # Example
//!
//! ```rust,no_run
//! use monitor_status_testkit::{MockMonitorApi, detail_body, search_body, summary};
//!
//! # async fn example() {
//! let api = MockMonitorApi::start().await;
//! api.stub_search("cpu-alert", 200, search_body([summary("cpu-alert", "123")]))
//!     .await;
//! api.stub_monitor("123", 200, detail_body("OK")).await;
//!
//! // Point the client under test at `api.base_url()`
//! # }
//! ```

pub mod fixtures;
pub mod mock;

// Re-exports for convenience
pub use fixtures::{detail_body, search_body, summary, wrapped_search_body};
pub use mock::MockMonitorApi;
