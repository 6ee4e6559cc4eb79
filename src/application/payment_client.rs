//! DokuPaymentClient - signed checkout creation and notification verification.
//!
//! `create_payment` runs: validate -> build body -> sign -> send with retries
//! -> normalize. It always resolves to exactly one `PaymentResult`.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use thiserror::Error;

use crate::adapters::gateway::ReqwestTransport;
use crate::adapters::identity::{SystemClock, UuidRequestIdGenerator};
use crate::adapters::validation::PaymentRequestSchemaValidator;
use crate::config::PaymentConfig;
use crate::domain::payment::{
    build_checkout_body, provider_error_message, CheckoutSummary, Credentials, PaymentRequest,
    PaymentResult, CHECKOUT_PATH, PAYMENT_FAILED,
};
use crate::domain::signature::{
    self, digest, InboundSignatureContext, SignableRequest, CLIENT_ID_HEADER, REQUEST_ID_HEADER,
    REQUEST_TIMESTAMP_HEADER, SIGNATURE_HEADER,
};
use crate::ports::{
    Clock, HttpRequest, HttpResponse, HttpTransport, PaymentRequestValidator, RequestIdGenerator,
    SchemaValidationError, TransportError,
};

use super::retry::{ResilientTransport, RetryPolicy};

/// Timestamp layout for `Request-Timestamp`: UTC, second precision, literal `Z`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Errors raised inside `try_create_payment`.
///
/// `create_payment` flattens all of these to `"Internal server error"`.
#[derive(Debug, Error)]
pub enum PaymentClientError {
    #[error("Invalid payment request: {0}")]
    Validation(#[from] SchemaValidationError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Failed to serialize checkout body: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unexpected gateway response: {0}")]
    InvalidResponse(String),
}

impl PaymentClientError {
    /// Diagnostic payload carried in the failed `PaymentResult`.
    pub fn details(&self) -> Value {
        match self {
            PaymentClientError::Validation(err) => err.to_details(),
            other => json!({ "error": other.to_string() }),
        }
    }
}

/// A checkout request signed and ready to send.
#[derive(Debug, Clone)]
pub struct SignedCheckout {
    pub signable: SignableRequest,
    pub signature: String,
    pub http: HttpRequest,
}

/// Client for the gateway's checkout API.
///
/// Holds the merchant credentials for its whole lifetime. Concurrent calls
/// share nothing mutable; each gets its own request id and timestamp.
pub struct DokuPaymentClient {
    credentials: Credentials,
    base_url: String,
    default_callback_url: Option<String>,
    transport: ResilientTransport,
    validator: Arc<dyn PaymentRequestValidator>,
    request_ids: Arc<dyn RequestIdGenerator>,
    clock: Arc<dyn Clock>,
}

impl DokuPaymentClient {
    /// Creates a client with the default validator, UUID request ids, the
    /// system clock and the default retry policy.
    pub fn new(credentials: Credentials, transport: Arc<dyn HttpTransport>) -> Self {
        let base_url = credentials.environment().base_url().to_string();
        Self {
            credentials,
            base_url,
            default_callback_url: None,
            transport: ResilientTransport::new(transport, RetryPolicy::default()),
            validator: Arc::new(PaymentRequestSchemaValidator::new()),
            request_ids: Arc::new(UuidRequestIdGenerator),
            clock: Arc::new(SystemClock),
        }
    }

    /// Builds a reqwest-backed client from configuration.
    pub fn from_config(config: &PaymentConfig) -> Result<Self, PaymentClientError> {
        let transport =
            ReqwestTransport::new(Duration::from_secs(config.request_timeout_secs))?;

        let mut client = Self::new(config.credentials(), Arc::new(transport))
            .with_retry_policy(config.retry_policy());
        if let Some(url) = &config.callback_url {
            client = client.with_default_callback_url(url.clone());
        }
        Ok(client)
    }

    pub fn with_validator(mut self, validator: Arc<dyn PaymentRequestValidator>) -> Self {
        self.validator = validator;
        self
    }

    pub fn with_request_ids(mut self, request_ids: Arc<dyn RequestIdGenerator>) -> Self {
        self.request_ids = request_ids;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.transport = ResilientTransport::new(self.transport.inner(), policy);
        self
    }

    /// Overrides the environment's host (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Callback URL used when a request does not carry one.
    pub fn with_default_callback_url(mut self, url: impl Into<String>) -> Self {
        self.default_callback_url = Some(url.into());
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        self.transport.policy()
    }

    /// Creates a hosted checkout page.
    ///
    /// Never fails: validation problems, transport exhaustion and malformed
    /// gateway responses all come back as a failed result with the message
    /// `"Internal server error"`. Gateway rejections carry the gateway's message.
    pub async fn create_payment(&self, request: &PaymentRequest) -> PaymentResult {
        match self.try_create_payment(request).await {
            Ok(result) => result,
            Err(err) => {
                tracing::error!(
                    invoice_number = %request.invoice_number,
                    error = %err,
                    "Payment creation failed"
                );
                PaymentResult::internal_error(Some(err.details()))
            }
        }
    }

    /// Like [`create_payment`](Self::create_payment), but surfaces internal
    /// failures as typed errors.
    ///
    /// Gateway rejections are still `Ok(PaymentResult::Failure { .. })`.
    pub async fn try_create_payment(
        &self,
        request: &PaymentRequest,
    ) -> Result<PaymentResult, PaymentClientError> {
        self.validator.validate(request)?;

        let signed = self.sign_checkout(request)?;

        tracing::info!(
            request_id = %signed.signable.request_id,
            invoice_number = %request.invoice_number,
            amount = request.amount,
            "Creating payment"
        );

        let response = self.transport.execute(&signed.http).await?;

        if !response.is_success() {
            return Ok(self.rejected(&signed, response));
        }

        let body: Value = response.json().map_err(|e| {
            PaymentClientError::InvalidResponse(format!("response is not JSON: {}", e))
        })?;

        let (envelope, summary) = CheckoutSummary::from_response(&body).ok_or_else(|| {
            PaymentClientError::InvalidResponse(
                "response carries no payment url and invoice number".to_string(),
            )
        })?;

        tracing::info!(
            request_id = %signed.signable.request_id,
            invoice_number = %summary.invoice_number,
            envelope = ?envelope,
            "Payment created"
        );

        Ok(PaymentResult::success(summary))
    }

    /// Builds and signs the checkout request without sending it.
    ///
    /// The digest covers exactly the bytes placed in the request body.
    pub fn sign_checkout(
        &self,
        request: &PaymentRequest,
    ) -> Result<SignedCheckout, PaymentClientError> {
        let request_id = self.request_ids.next_id();
        let timestamp = self.clock.now().format(TIMESTAMP_FORMAT).to_string();

        let body = build_checkout_body(
            request,
            &request_id,
            self.default_callback_url.as_deref(),
        );
        let body_bytes = serde_json::to_vec(&body)?;

        let signable = SignableRequest {
            client_id: self.credentials.client_id().to_string(),
            request_id,
            timestamp,
            target_path: CHECKOUT_PATH.to_string(),
            body_digest: digest(&body_bytes),
        };

        let signature = signature::sign(
            &signable.client_id,
            &signable.request_id,
            &signable.target_path,
            &signable.body_digest,
            self.credentials.secret_key(),
            &signable.timestamp,
        );

        let http = HttpRequest::post(format!("{}{}", self.base_url, CHECKOUT_PATH), body_bytes)
            .with_header("Content-Type", "application/json")
            .with_header(CLIENT_ID_HEADER, signable.client_id.clone())
            .with_header(REQUEST_ID_HEADER, signable.request_id.clone())
            .with_header(REQUEST_TIMESTAMP_HEADER, signable.timestamp.clone())
            .with_header(SIGNATURE_HEADER, signature.clone());

        Ok(SignedCheckout {
            signable,
            signature,
            http,
        })
    }

    /// Checks an inbound notification's signature against these credentials.
    ///
    /// `inbound.request_target` must be the path the notification was
    /// delivered to. Returns `false` on any failure.
    pub fn verify_notification(&self, body: &[u8], inbound: &InboundSignatureContext) -> bool {
        match signature::check(
            body,
            inbound,
            self.credentials.client_id(),
            self.credentials.secret_key(),
        ) {
            Ok(()) => true,
            Err(reason) => {
                tracing::warn!(
                    request_id = inbound.request_id.as_deref().unwrap_or_default(),
                    request_target = %inbound.request_target,
                    reason = %reason,
                    "Rejected notification signature"
                );
                false
            }
        }
    }

    fn rejected(&self, signed: &SignedCheckout, response: HttpResponse) -> PaymentResult {
        let details = response
            .json()
            .unwrap_or_else(|_| Value::String(response.text()));
        let message = provider_error_message(&details).unwrap_or_else(|| PAYMENT_FAILED.to_string());

        tracing::warn!(
            request_id = %signed.signable.request_id,
            status = response.status,
            message = %message,
            "Gateway rejected payment"
        );

        PaymentResult::failure(message, Some(details))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::gateway::MockHttpTransport;
    use crate::adapters::identity::{FixedClock, SequentialRequestIds};
    use crate::domain::payment::Environment;
    use chrono::{TimeZone, Utc};

    const CLIENT_ID: &str = "MCH-0001";
    const SECRET: &str = "SK-secret";

    fn client(mock: &MockHttpTransport) -> DokuPaymentClient {
        DokuPaymentClient::new(
            Credentials::new(CLIENT_ID, SECRET, Environment::Sandbox),
            Arc::new(mock.clone()),
        )
        .with_clock(Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2024, 3, 15, 9, 5, 7).unwrap(),
        )))
        .with_request_ids(Arc::new(SequentialRequestIds::new([
            "0f1e2d3c-4b5a-4968-8776-a5b4c3d2e1f0",
        ])))
        .with_retry_policy(RetryPolicy::new(3, Duration::ZERO))
    }

    fn request() -> PaymentRequest {
        PaymentRequest {
            amount: 75000,
            invoice_number: "INV-77".to_string(),
            customer_name: "Rina".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn signs_checkout_with_second_precision_utc_timestamp() {
        let mock = MockHttpTransport::new();
        let signed = client(&mock).sign_checkout(&request()).unwrap();

        assert_eq!(signed.signable.timestamp, "2024-03-15T09:05:07Z");
        assert_eq!(signed.signable.request_id, "0f1e2d3c-4b5a-4968-8776-a5b4c3d2e1f0");
        assert_eq!(signed.signable.target_path, "/checkout/v1/payment");
        assert_eq!(
            signed.http.url,
            "https://api-sandbox.doku.com/checkout/v1/payment"
        );
    }

    #[test]
    fn signature_header_matches_recomputed_signature_over_sent_bytes() {
        let mock = MockHttpTransport::new();
        let signed = client(&mock).sign_checkout(&request()).unwrap();
        let http = &signed.http;

        let expected = signature::sign(
            CLIENT_ID,
            http.header("Request-Id").unwrap(),
            CHECKOUT_PATH,
            &digest(&http.body),
            SECRET,
            http.header("Request-Timestamp").unwrap(),
        );

        assert_eq!(http.header("Signature"), Some(expected.as_str()));
        assert_eq!(http.header("Client-Id"), Some(CLIENT_ID));
        assert_eq!(http.header("Content-Type"), Some("application/json"));
    }

    #[test]
    fn guest_customer_id_derives_from_request_id() {
        let mock = MockHttpTransport::new();
        let signed = client(&mock).sign_checkout(&request()).unwrap();
        let body: Value = serde_json::from_slice(&signed.http.body).unwrap();
        assert_eq!(body["customer"]["id"], "GUEST-0f1e2d3c");
    }

    #[test]
    fn production_credentials_target_production_host() {
        let mock = MockHttpTransport::new();
        let client = DokuPaymentClient::new(
            Credentials::new(CLIENT_ID, SECRET, Environment::Production),
            Arc::new(mock),
        );
        let signed = client.sign_checkout(&request()).unwrap();
        assert!(signed.http.url.starts_with("https://api.doku.com/"));
    }

    #[tokio::test]
    async fn success_without_payment_url_is_internal_error() {
        let mock = MockHttpTransport::always_responding(200, r#"{"message":["SUCCESS"]}"#);
        let result = client(&mock).create_payment(&request()).await;
        assert_eq!(result.message(), Some("Internal server error"));
    }

    #[tokio::test]
    async fn non_json_rejection_keeps_raw_text_as_details() {
        let mock = MockHttpTransport::always_responding(401, "Unauthorized");
        let result = client(&mock).create_payment(&request()).await;

        assert_eq!(result.message(), Some(PAYMENT_FAILED));
        assert_eq!(result.details(), Some(&Value::String("Unauthorized".to_string())));
    }

    #[tokio::test]
    async fn try_create_payment_exposes_error_kind() {
        let mock = MockHttpTransport::always_failing(TransportError::Connection("refused".into()));
        let err = client(&mock).try_create_payment(&request()).await.unwrap_err();
        assert!(matches!(err, PaymentClientError::Transport(_)));

        let invalid = PaymentRequest {
            amount: 0,
            ..request()
        };
        let err = client(&mock).try_create_payment(&invalid).await.unwrap_err();
        assert!(matches!(err, PaymentClientError::Validation(_)));
    }

    #[test]
    fn verify_notification_uses_client_credentials() {
        let mock = MockHttpTransport::new();
        let client = client(&mock);
        let body = br#"{"order":{"invoice_number":"INV-77"}}"#;
        let target = "/payments/notifications";

        let inbound = InboundSignatureContext {
            signature: Some(signature::sign(
                CLIENT_ID,
                "n-1",
                target,
                &digest(body),
                SECRET,
                "2024-03-15T09:10:00Z",
            )),
            timestamp: Some("2024-03-15T09:10:00Z".to_string()),
            request_id: Some("n-1".to_string()),
            client_id: Some(CLIENT_ID.to_string()),
            request_target: target.to_string(),
        };

        assert!(client.verify_notification(body, &inbound));
        assert!(!client.verify_notification(b"{}", &inbound));
    }
}
