//! reqwest-backed implementation of `HttpTransport`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::ports::{HttpRequest, HttpResponse, HttpTransport, TransportError};

/// Sends requests with a shared `reqwest::Client`.
///
/// The configured timeout covers a single attempt; the retry layer above
/// decides whether to try again.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Builds a transport whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, timeout })
    }

    fn map_error(&self, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout {
                timeout_secs: self.timeout.as_secs(),
            }
        } else if err.is_connect() {
            TransportError::Connection(err.to_string())
        } else {
            TransportError::Other(err.to_string())
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = reqwest::Method::from_bytes(request.method.as_str().as_bytes())
            .map_err(|e| TransportError::Other(format!("Invalid method: {}", e)))?;

        let mut builder = self
            .client
            .request(method, &request.url)
            .body(request.body.clone());

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await.map_err(|e| self.map_error(e))?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| self.map_error(e))?;

        tracing::debug!(url = %request.url, status, "Gateway responded");

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_bytes, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn sends_headers_and_exact_body_bytes() {
        let server = MockServer::start().await;
        let body = br#"{"order":{"amount":1}}"#.to_vec();

        Mock::given(method("POST"))
            .and(path("/checkout/v1/payment"))
            .and(header("Client-Id", "MCH-0001"))
            .and(body_bytes(body.clone()))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"ok\":true}"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new(Duration::from_secs(5)).unwrap();
        let request = HttpRequest::post(format!("{}/checkout/v1/payment", server.uri()), body)
            .with_header("Client-Id", "MCH-0001");

        let response = transport.send(&request).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.text(), "{\"ok\":true}");
    }

    #[tokio::test]
    async fn returns_error_statuses_as_responses() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new(Duration::from_secs(5)).unwrap();
        let request = HttpRequest::post(server.uri(), Vec::new());

        let response = transport.send(&request).await.unwrap();
        assert_eq!(response.status, 503);
    }

    #[tokio::test]
    async fn maps_slow_responses_to_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new(Duration::from_millis(100)).unwrap();
        let request = HttpRequest::post(server.uri(), Vec::new());

        let err = transport.send(&request).await.unwrap_err();
        assert!(matches!(err, TransportError::Timeout { .. }));
    }
}
