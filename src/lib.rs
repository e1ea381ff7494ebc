//! Monitor Status - look up a monitor by name and report its alert state
//!
//! A small client for a hosted monitoring service's HTTP API. Given a
//! monitor's display name it searches for the monitor, picks the exact name
//! match, and fetches that monitor's `overall_state`.
//!
//! ## Modules
//!
//! - [`client`] - HTTP client and wire types for the monitoring API
//! - [`config`] - Credentials and runtime settings
//! - [`lookup`] - Name resolution, status fetch, and the printed report

pub mod client;
pub mod config;
pub mod lookup;

pub use client::{MonitorApi, MonitorClient, MonitorId};
pub use config::{Config, Credentials};
pub use lookup::{Lookup, Report, run};
