//! JSON payload builders
//!
//! Shapes mirror what the monitoring API returns: the search endpoint
//! answers with a list of `{name, id}` records and the by-id endpoint with
//! a monitor object carrying `overall_state`.

use serde_json::{Value, json};

/// A single search result entry
///
/// `id` accepts anything JSON-convertible so tests can cover both numeric
/// and string identifiers.
pub fn summary(name: &str, id: impl Into<Value>) -> Value {
    json!({ "name": name, "id": id.into() })
}

/// A bare-array search response body
pub fn search_body(entries: impl IntoIterator<Item = Value>) -> Value {
    Value::Array(entries.into_iter().collect())
}

/// A search response body wrapped in a `monitors` field
pub fn wrapped_search_body(entries: impl IntoIterator<Item = Value>) -> Value {
    json!({
        "monitors": search_body(entries),
        "metadata": { "page": 0, "per_page": 30 }
    })
}

/// A by-id response body with the given overall state
pub fn detail_body(overall_state: &str) -> Value {
    json!({
        "overall_state": overall_state,
        "type": "metric alert",
        "query": "avg(last_5m):avg:system.cpu.user{*} > 90"
    })
}
