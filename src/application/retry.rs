//! Resilient request execution: bounded retries with a fixed backoff.
//!
//! Server errors (5xx) and transport failures are transient and retried
//! until the budget runs out. Everything below 500 is terminal and returned
//! as soon as it arrives. The same request is re-issued on every attempt.

use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;

use crate::ports::{HttpRequest, HttpResponse, HttpTransport, TransportError};

pub const DEFAULT_MAX_RETRIES: u32 = 3;

pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(1);

/// How many times to retry and how long to wait between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    pub max_retries: u32,

    /// Constant wait before each retry.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            backoff: DEFAULT_BACKOFF,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, backoff: Duration) -> Self {
        Self {
            max_retries,
            backoff,
        }
    }

    /// Upper bound on calls made for one request.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries + 1
    }
}

/// Anything carrying an HTTP status code the retry loop can classify.
pub trait StatusResponse {
    fn status_code(&self) -> u16;
}

impl StatusResponse for HttpResponse {
    fn status_code(&self) -> u16 {
        self.status
    }
}

/// Runs `call` until it yields a terminal outcome or the retry budget is spent.
///
/// - status < 500: returned immediately
/// - status >= 500: retried; the last response is returned once the budget is spent
/// - `Err`: retried; the last error is returned once the budget is spent
///
/// The backoff suspends only the calling task.
pub async fn execute_with_retry<R, E, F, Fut>(policy: &RetryPolicy, mut call: F) -> Result<R, E>
where
    R: StatusResponse,
    E: Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<R, E>>,
{
    let mut remaining = policy.max_retries;
    let mut attempt: u32 = 1;

    loop {
        match call().await {
            Ok(response) => {
                let status = response.status_code();
                if status < 500 {
                    return Ok(response);
                }
                if remaining == 0 {
                    tracing::error!(attempt, status, "Server error, retries exhausted");
                    return Ok(response);
                }
                tracing::warn!(
                    attempt,
                    status,
                    backoff_ms = policy.backoff.as_millis() as u64,
                    "Server error, retrying"
                );
            }
            Err(err) => {
                if remaining == 0 {
                    tracing::error!(attempt, error = %err, "Request failed, retries exhausted");
                    return Err(err);
                }
                tracing::warn!(
                    attempt,
                    error = %err,
                    backoff_ms = policy.backoff.as_millis() as u64,
                    "Request failed, retrying"
                );
            }
        }

        sleep(policy.backoff).await;
        remaining -= 1;
        attempt += 1;
    }
}

/// An `HttpTransport` wrapped in a retry policy.
#[derive(Clone)]
pub struct ResilientTransport {
    inner: Arc<dyn HttpTransport>,
    policy: RetryPolicy,
}

impl ResilientTransport {
    pub fn new(inner: Arc<dyn HttpTransport>, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// The wrapped single-attempt transport.
    pub fn inner(&self) -> Arc<dyn HttpTransport> {
        Arc::clone(&self.inner)
    }

    /// Sends `request`, retrying transient failures per the policy.
    pub async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        execute_with_retry(&self.policy, || self.inner.send(request)).await
    }
}
