//! Monitor lookup
//!
//! Resolves a monitor name to its id, then fetches that monitor's status.
//!
//! ## Flow
//!
//! 1. [`resolve`] searches by name and keeps the first exact match
//! 2. [`fetch_status`] reads the resolved monitor's `overall_state`
//! 3. [`run`] chains the two and stops after step 1 unless an id was found
//!
//! Neither step propagates an error: failures are returned as [`Failure`]
//! values and rendered by [`Report`].

mod fetcher;
mod outcome;
mod report;
mod resolver;
#[cfg(test)]
mod stub;

pub use fetcher::fetch_status;
pub use outcome::{Failure, Lookup};
pub use report::{MISSING_STATUS, Report};
pub use resolver::{first_exact_match, resolve};

use tracing::info;

use crate::client::MonitorApi;
use crate::config::Credentials;

/// Resolve `name` and, if found, fetch its status
pub async fn run<A>(api: &A, credentials: &Credentials, name: &str) -> Report
where
    A: MonitorApi + ?Sized,
{
    let id = match resolve(api, credentials, name).await {
        Lookup::Found(id) => id,
        Lookup::NotFound => {
            return Report::NotFound {
                name: name.to_string(),
            };
        }
        Lookup::Failed(failure) => {
            return Report::SearchFailed {
                name: name.to_string(),
                failure,
            };
        }
    };

    let status = fetch_status(api, credentials, &id).await;
    info!(monitor = %name, id = %id, found = status.is_ok(), "Lookup complete");

    Report::Status {
        name: name.to_string(),
        id,
        status,
    }
}
