//! Status Fetcher
//!
//! Reads a resolved monitor's `overall_state`. The value is passed through
//! as the API reports it.

use tracing::debug;

use super::outcome::Failure;
use crate::client::{MonitorApi, MonitorId};
use crate::config::Credentials;

/// Fetch the overall state of monitor `id` with a single request
///
/// An unknown id surfaces as the endpoint's HTTP status.
pub async fn fetch_status<A>(
    api: &A,
    credentials: &Credentials,
    id: &MonitorId,
) -> Result<String, Failure>
where
    A: MonitorApi + ?Sized,
{
    debug!(id = %id, "Fetching monitor status");

    match api.monitor(credentials, id).await {
        Ok(detail) => {
            debug!(id = %id, status = %detail.overall_state, "Monitor status fetched");
            Ok(detail.overall_state)
        }
        Err(e) => {
            debug!(id = %id, error = %e, "Monitor fetch failed");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MonitorClient;
    use crate::lookup::stub::StubMonitors;

    fn creds() -> Credentials {
        Credentials::new("api", "app")
    }

    #[tokio::test]
    async fn test_status_passed_through() {
        let api = StubMonitors::new().with_detail("42", "Ignored Custom State");

        let outcome = fetch_status(&api, &creds(), &MonitorId::from("42")).await;

        assert_eq!(outcome, Ok("Ignored Custom State".to_string()));
        assert_eq!(api.monitor_calls(), 1);
    }

    #[tokio::test]
    async fn test_unknown_id_is_status_failure() {
        let api = StubMonitors::new();

        let outcome = fetch_status(&api, &creds(), &MonitorId::from(1)).await;

        assert_eq!(outcome, Err(Failure::Status(404)));
    }

    #[tokio::test]
    async fn test_server_error() {
        let api = StubMonitors::new().with_detail_status("42", 500);

        let outcome = fetch_status(&api, &creds(), &MonitorId::from(42)).await;

        assert_eq!(outcome, Err(Failure::Status(500)));
    }

    #[tokio::test]
    async fn test_missing_overall_state() {
        let api = StubMonitors::new().with_detail_malformed("42");

        let outcome = fetch_status(&api, &creds(), &MonitorId::from(42)).await;

        assert!(matches!(outcome, Err(Failure::Malformed(_))));
    }

    #[tokio::test]
    async fn test_fetch_transport_failure() {
        let client = MonitorClient::new("http://127.0.0.1:1").unwrap();

        let outcome = fetch_status(&client, &creds(), &MonitorId::from(42)).await;

        match outcome {
            Err(Failure::Transport(description)) => assert!(!description.is_empty()),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
