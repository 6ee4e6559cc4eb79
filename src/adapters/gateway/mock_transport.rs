//! Mock HTTP transport for testing.
//!
//! Provides a scriptable implementation of `HttpTransport` for unit and
//! integration tests. Supports:
//! - Queued responses and transport errors, consumed in order
//! - A fallback outcome once the queue is empty
//! - Request recording for assertions

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::ports::{HttpRequest, HttpResponse, HttpTransport, TransportError};

/// Mock transport for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockHttpTransport::new();
/// mock.push_response(500, "{}");
/// mock.push_response(200, r#"{"response": ...}"#);
///
/// // ... exercise the client ...
///
/// assert_eq!(mock.call_count(), 2);
/// ```
#[derive(Default)]
pub struct MockHttpTransport {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Outcomes returned in order, one per call.
    queue: VecDeque<Result<HttpResponse, TransportError>>,

    /// Returned once the queue is drained.
    fallback: Option<Result<HttpResponse, TransportError>>,

    /// Every request received.
    requests: Vec<HttpRequest>,
}

impl MockHttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock whose every call fails with `error`.
    pub fn always_failing(error: TransportError) -> Self {
        let mock = Self::new();
        mock.inner.lock().unwrap().fallback = Some(Err(error));
        mock
    }

    /// Create a mock whose every call returns the given response.
    pub fn always_responding(status: u16, body: impl Into<Vec<u8>>) -> Self {
        let mock = Self::new();
        mock.inner.lock().unwrap().fallback = Some(Ok(HttpResponse::new(status, body)));
        mock
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Queue a response for the next unanswered call.
    pub fn push_response(&self, status: u16, body: impl Into<Vec<u8>>) {
        self.inner
            .lock()
            .unwrap()
            .queue
            .push_back(Ok(HttpResponse::new(status, body)));
    }

    /// Queue a transport failure for the next unanswered call.
    pub fn push_error(&self, error: TransportError) {
        self.inner.lock().unwrap().queue.push_back(Err(error));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking
    // ════════════════════════════════════════════════════════════════════════════

    /// Get all recorded requests.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn call_count(&self) -> usize {
        self.inner.lock().unwrap().requests.len()
    }
}

impl Clone for MockHttpTransport {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut state = self.inner.lock().unwrap();
        state.requests.push(request.clone());

        if let Some(outcome) = state.queue.pop_front() {
            return outcome;
        }

        state.fallback.clone().unwrap_or_else(|| {
            Err(TransportError::Other(
                "MockHttpTransport has no scripted outcome".to_string(),
            ))
        })
    }
}
