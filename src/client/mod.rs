//! Monitoring API Client
//!
//! Hand-written client for the monitor search and by-id endpoints.

mod monitors;
mod types;

pub use monitors::{
    API_KEY_HEADER, APP_KEY_HEADER, MonitorApi, MonitorClient, MonitorError, MonitorResult,
};
pub use types::*;
