//! Task-local correlation context for web requests.
//!
//! `TraceSpan` establishes the scope; anything running inside a request
//! (handlers, services, adapters, error mapping) can read the current
//! correlation id without threading it through every signature.

use std::cell::RefCell;

use tokio::task_local;

task_local! {
    static CORRELATION_ID: RefCell<Option<String>>;
}

const UNKNOWN: &str = "unknown";

/// Correlation id of the current request, or `"unknown"` outside one.
pub fn correlation_id() -> String {
    CORRELATION_ID
        .try_with(|cell| cell.borrow().clone())
        .ok()
        .flatten()
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Run a future with `correlation_id` in scope.
pub async fn with_correlation_id<F, R>(correlation_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    CORRELATION_ID
        .scope(RefCell::new(Some(correlation_id)), future)
        .await
}
