//! Monitoring API Types
//!
//! Typed records for the two payloads the lookup reads. Only the fields the
//! tool relies on are required; everything else the API sends is ignored.

use serde::Deserialize;
use std::fmt;

/// Opaque monitor identifier
///
/// The API reports ids as JSON numbers, but string ids are accepted too and
/// passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum MonitorId {
    Number(i64),
    Text(String),
}

impl fmt::Display for MonitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonitorId::Number(id) => write!(f, "{id}"),
            MonitorId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for MonitorId {
    fn from(id: i64) -> Self {
        MonitorId::Number(id)
    }
}

impl From<&str> for MonitorId {
    fn from(id: &str) -> Self {
        MonitorId::Text(id.to_string())
    }
}

/// One entry of a monitor search
/// Endpoint: GET /api/v1/monitor/search
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MonitorSummary {
    /// Human-assigned display name
    pub name: String,
    pub id: MonitorId,
}

/// Monitor details
/// Endpoint: GET /api/v1/monitor/{id}
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MonitorDetail {
    /// Aggregated alert status: "OK", "Alert", "Warn", "No Data", ...
    pub overall_state: String,
    #[serde(default)]
    pub id: Option<MonitorId>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Search response body
///
/// Either a bare list of summaries or the paged object form, which nests
/// them under `monitors`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SearchResponse {
    List(Vec<MonitorSummary>),
    Paged { monitors: Vec<MonitorSummary> },
}

impl SearchResponse {
    /// Candidate monitors in response order
    pub fn into_monitors(self) -> Vec<MonitorSummary> {
        match self {
            SearchResponse::List(monitors) | SearchResponse::Paged { monitors } => monitors,
        }
    }
}
