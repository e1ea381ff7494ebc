//! Lookup report
//!
//! The printed result of one run. Failures are rendered here, once, so
//! each failed call contributes exactly one diagnostic line.

use super::outcome::Failure;
use crate::client::MonitorId;

/// Shown in place of a status that could not be fetched
pub const MISSING_STATUS: &str = "None";

/// Final state of a lookup run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// The search succeeded but no monitor has exactly this name
    NotFound { name: String },
    /// The search request failed; no status was fetched
    SearchFailed { name: String, failure: Failure },
    /// The monitor was resolved and its status fetched (or attempted)
    Status {
        name: String,
        id: MonitorId,
        status: Result<String, Failure>,
    },
}

impl Report {
    /// Output lines, in print order
    pub fn lines(&self) -> Vec<String> {
        match self {
            Report::NotFound { name } => vec![format!("Monitor '{name}' not found")],
            Report::SearchFailed { failure, .. } => {
                vec![format!("Failed to search monitors: {failure}")]
            }
            Report::Status { name, id, status } => match status {
                Ok(state) => vec![status_line(name, state)],
                Err(failure) => vec![
                    format!("Failed to fetch monitor {id}: {failure}"),
                    status_line(name, MISSING_STATUS),
                ],
            },
        }
    }
}

fn status_line(name: &str, status: &str) -> String {
    format!("Monitor ID {name} - Status: {status}")
}
