//! HttpTransport port - a single fallible HTTP exchange.
//!
//! The retry layer sits above this port, so implementations perform exactly
//! one network round trip per `send` and never retry on their own.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Outbound HTTP request, fully formed and already signed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: http::Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Exact bytes to transmit. The signed digest was computed over these.
    pub body: Vec<u8>,
}

impl HttpRequest {
    pub fn post(url: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            method: http::Method::POST,
            url: url.into(),
            headers: Vec::new(),
            body,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Looks up a header value, ignoring name case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Response as received, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Network-level failure. Every variant is transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Transport error: {0}")]
    Other(String),
}

/// Port for sending HTTP requests.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Performs one request/response exchange.
    ///
    /// Any HTTP status is returned as `Ok`; only failures to obtain a
    /// response at all are errors.
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}
