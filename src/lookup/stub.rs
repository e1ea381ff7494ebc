//! In-memory `MonitorApi` for exercising the lookup without HTTP

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::client::{
    MonitorApi, MonitorDetail, MonitorError, MonitorId, MonitorResult, MonitorSummary,
};
use crate::config::Credentials;

/// Canned answer for one endpoint
#[derive(Debug, Clone)]
enum Reply<T> {
    Ok(T),
    Status(u16),
    Malformed,
}

impl<T: Clone> Reply<T> {
    fn to_result(&self) -> MonitorResult<T> {
        match self {
            Reply::Ok(value) => Ok(value.clone()),
            Reply::Status(status) => Err(MonitorError::Status { status: *status }),
            Reply::Malformed => {
                let err = serde_json::from_str::<MonitorDetail>("{\"id\":1}")
                    .expect_err("detail without overall_state must not parse");
                Err(MonitorError::Malformed(err))
            }
        }
    }
}

/// Stubbed monitoring API that counts calls per endpoint
#[derive(Debug)]
pub(crate) struct StubMonitors {
    search: Reply<Vec<MonitorSummary>>,
    details: HashMap<String, Reply<MonitorDetail>>,
    search_calls: AtomicUsize,
    monitor_calls: AtomicUsize,
}

impl StubMonitors {
    /// Empty search results, every id unknown (404)
    pub(crate) fn new() -> Self {
        Self {
            search: Reply::Ok(Vec::new()),
            details: HashMap::new(),
            search_calls: AtomicUsize::new(0),
            monitor_calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn with_search(mut self, candidates: Vec<MonitorSummary>) -> Self {
        self.search = Reply::Ok(candidates);
        self
    }

    pub(crate) fn with_search_status(mut self, status: u16) -> Self {
        self.search = Reply::Status(status);
        self
    }

    pub(crate) fn with_search_malformed(mut self) -> Self {
        self.search = Reply::Malformed;
        self
    }

    pub(crate) fn with_detail(mut self, id: &str, overall_state: &str) -> Self {
        let detail = MonitorDetail {
            overall_state: overall_state.to_string(),
            id: None,
            name: None,
        };
        self.details.insert(id.to_string(), Reply::Ok(detail));
        self
    }

    pub(crate) fn with_detail_status(mut self, id: &str, status: u16) -> Self {
        self.details.insert(id.to_string(), Reply::Status(status));
        self
    }

    pub(crate) fn with_detail_malformed(mut self, id: &str) -> Self {
        self.details.insert(id.to_string(), Reply::Malformed);
        self
    }

    pub(crate) fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn monitor_calls(&self) -> usize {
        self.monitor_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MonitorApi for StubMonitors {
    async fn search(
        &self,
        _credentials: &Credentials,
        _name: &str,
    ) -> MonitorResult<Vec<MonitorSummary>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.search.to_result()
    }

    async fn monitor(
        &self,
        _credentials: &Credentials,
        id: &MonitorId,
    ) -> MonitorResult<MonitorDetail> {
        self.monitor_calls.fetch_add(1, Ordering::SeqCst);
        self.details
            .get(&id.to_string())
            .map(Reply::to_result)
            .unwrap_or_else(|| Err(MonitorError::Status { status: 404 }))
    }
}
