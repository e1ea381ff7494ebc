//! Resolver
//!
//! Turns a monitor display name into its identifier. The search endpoint
//! matches loosely, so its results are only candidates: the first entry
//! whose name is byte-for-byte equal to the requested name wins.

use tracing::debug;

use super::outcome::Lookup;
use crate::client::{MonitorApi, MonitorId, MonitorSummary};
use crate::config::Credentials;

/// Resolve `name` to a monitor id with a single search request
pub async fn resolve<A>(api: &A, credentials: &Credentials, name: &str) -> Lookup<MonitorId>
where
    A: MonitorApi + ?Sized,
{
    debug!(monitor = %name, "Searching for monitor");

    match api.search(credentials, name).await {
        Ok(candidates) => {
            let count = candidates.len();
            match first_exact_match(candidates, name) {
                Some(id) => {
                    debug!(monitor = %name, id = %id, candidates = count, "Monitor resolved");
                    Lookup::Found(id)
                }
                None => {
                    debug!(monitor = %name, candidates = count, "No exact name match");
                    Lookup::NotFound
                }
            }
        }
        Err(e) => {
            debug!(monitor = %name, error = %e, "Monitor search failed");
            Lookup::Failed(e.into())
        }
    }
}

/// Id of the first candidate named exactly `name`, in response order
pub fn first_exact_match<I>(candidates: I, name: &str) -> Option<MonitorId>
where
    I: IntoIterator<Item = MonitorSummary>,
{
    candidates
        .into_iter()
        .find(|candidate| candidate.name == name)
        .map(|candidate| candidate.id)
}
