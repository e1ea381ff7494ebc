//! Lookup outcomes
//!
//! Name resolution ends in a [`Lookup`] and the status fetch in a
//! `Result<_, Failure>`; failures are captured as values instead of
//! propagating out of the component.

use std::error::Error as _;
use std::fmt;

use crate::client::MonitorError;

/// Outcome of one lookup step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    /// The call succeeded and produced a value
    Found(T),
    /// The call succeeded but nothing matched
    NotFound,
    /// The call failed
    Failed(Failure),
}

/// Why an API call produced no result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The endpoint answered with something other than 200
    Status(u16),
    /// The request never completed (DNS, connect, TLS, timeout)
    Transport(String),
    /// A 200 response whose body did not match the expected record
    Malformed(String),
    /// The request URL could not be built
    InvalidUrl(String),
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Status(code) => write!(f, "HTTP status {code}"),
            Failure::Transport(description) => write!(f, "request failed: {description}"),
            Failure::Malformed(description) => write!(f, "malformed response: {description}"),
            Failure::InvalidUrl(description) => write!(f, "invalid URL: {description}"),
        }
    }
}

impl From<MonitorError> for Failure {
    fn from(err: MonitorError) -> Self {
        match err {
            MonitorError::Status { status } => Failure::Status(status),
            MonitorError::Request(e) => Failure::Transport(describe(&e)),
            MonitorError::Malformed(e) => Failure::Malformed(e.to_string()),
            MonitorError::InvalidUrl(e) => Failure::InvalidUrl(e.to_string()),
        }
    }
}

/// Render an error with its source chain on one line
///
/// reqwest's top-level message only names the URL; the cause ("connection
/// refused", "dns error", ...) lives further down the chain.
fn describe(err: &reqwest::Error) -> String {
    let mut description = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !description.contains(&cause_text) {
            description.push_str(": ");
            description.push_str(&cause_text);
        }
        source = cause.source();
    }
    description
}
