//! Mock transport for testing.
//!
//! [`MockTransport`] implements [`Transport`] without touching the
//! network: it records every request and replays queued responses in
//! order. Tests assert on the recorded requests (method, path, query,
//! body) and on the call count — the latter is how "zero network calls"
//! properties are verified.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Error;
use crate::transport::{Method, Request, Transport};

/// Transport stub with queued responses and call recording.
///
/// # Example
///
/// ```rust,ignore
/// use octogate::testing::MockTransport;
/// use std::sync::Arc;
///
/// let transport = Arc::new(MockTransport::authenticated());
/// transport.enqueue_ok(serde_json::json!([]));
///
/// let client = octogate::GitHubClient::with_transport(transport.clone());
/// let branches = client.branches().list("acme", "octogate").await?;
///
/// assert_eq!(transport.call_count(), 1);
/// assert!(branches.is_empty());
/// ```
pub struct MockTransport {
    credential: bool,
    responses: Mutex<VecDeque<Result<Value, Error>>>,
    requests: Mutex<Vec<Request>>,
}

impl MockTransport {
    /// Create a mock that reports a configured credential.
    #[must_use]
    pub fn authenticated() -> Self {
        Self::with_credential(true)
    }

    /// Create a mock that reports no credential.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::with_credential(false)
    }

    fn with_credential(credential: bool) -> Self {
        Self {
            credential,
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful JSON response.
    pub fn enqueue_ok(&self, value: Value) {
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(Ok(value));
    }

    /// Queue a failure.
    pub fn enqueue_err(&self, error: Error) {
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(Err(error));
    }

    /// Number of requests issued so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// All recorded requests, in issue order.
    #[must_use]
    pub fn requests(&self) -> Vec<Request> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Whether a request with this method and exact path was issued.
    #[must_use]
    pub fn was_called(&self, method: Method, path: &str) -> bool {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .any(|r| r.method == method && r.path == path)
    }

    /// Clear recorded requests and queued responses.
    pub fn reset(&self) {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn has_credential(&self) -> bool {
        self.credential
    }

    async fn send(&self, request: Request) -> Result<Value, Error> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request);

        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .unwrap_or_else(|| Err(Error::Transport("no mock response queued".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replays_responses_in_order_and_records_calls() {
        let mock = MockTransport::authenticated();
        mock.enqueue_ok(serde_json::json!({"first": true}));
        mock.enqueue_err(Error::NotFound {
            resource: "gone".to_string(),
        });

        let first = mock
            .send(Request::new(Method::Get, "/first"))
            .await
            .expect("first response is ok");
        assert_eq!(first["first"], true);

        let second = mock.send(Request::new(Method::Get, "/second")).await;
        assert!(matches!(second, Err(Error::NotFound { .. })));

        assert_eq!(mock.call_count(), 2);
        assert!(mock.was_called(Method::Get, "/first"));
        assert!(!mock.was_called(Method::Post, "/first"));
    }

    #[tokio::test]
    async fn exhausted_queue_fails_with_transport_error() {
        let mock = MockTransport::anonymous();
        let result = mock.send(Request::new(Method::Get, "/anything")).await;
        assert!(matches!(result, Err(Error::Transport(_))));
    }

    #[tokio::test]
    async fn reset_clears_recordings() {
        let mock = MockTransport::authenticated();
        mock.enqueue_ok(Value::Null);
        let _ = mock.send(Request::new(Method::Get, "/x")).await;

        mock.reset();
        assert_eq!(mock.call_count(), 0);
    }
}
