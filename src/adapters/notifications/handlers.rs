//! HTTP handler for gateway notifications.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;

use super::dto::{AcknowledgeResponse, ErrorResponse};
use crate::application::DokuPaymentClient;
use crate::domain::signature::InboundSignatureContext;
use crate::ports::{NotificationError, NotificationSink, VerifiedNotification};

/// Shared state for the notification endpoint.
#[derive(Clone)]
pub struct NotificationAppState {
    pub client: Arc<DokuPaymentClient>,
    pub sink: Arc<dyn NotificationSink>,
    /// Path the endpoint is mounted at; signed as `Request-Target`.
    pub request_target: String,
}

impl NotificationAppState {
    pub fn new(
        client: Arc<DokuPaymentClient>,
        sink: Arc<dyn NotificationSink>,
        request_target: impl Into<String>,
    ) -> Self {
        Self {
            client,
            sink,
            request_target: request_target.into(),
        }
    }
}

/// POST <notification path> - verify and forward a gateway notification
pub async fn receive_notification(
    State(state): State<NotificationAppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, NotificationApiError> {
    let inbound = InboundSignatureContext::from_headers(&headers, state.request_target.clone());

    if !state.client.verify_notification(&body, &inbound) {
        return Err(NotificationApiError::InvalidSignature);
    }

    let payload: Value = serde_json::from_slice(&body)
        .map_err(|e| NotificationApiError::MalformedPayload(e.to_string()))?;

    let request_id = inbound.request_id.unwrap_or_default();
    let notification = VerifiedNotification {
        client_id: inbound
            .client_id
            .unwrap_or_else(|| state.client.credentials().client_id().to_string()),
        request_id: request_id.clone(),
        timestamp: inbound.timestamp.unwrap_or_default(),
        payload,
    };

    state.sink.deliver(notification).await?;

    Ok((StatusCode::OK, Json(AcknowledgeResponse::accepted(request_id))))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts notification failures to HTTP responses.
#[derive(Debug)]
pub enum NotificationApiError {
    InvalidSignature,
    MalformedPayload(String),
    Sink(NotificationError),
}

impl From<NotificationError> for NotificationApiError {
    fn from(err: NotificationError) -> Self {
        Self::Sink(err)
    }
}

impl IntoResponse for NotificationApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            NotificationApiError::InvalidSignature => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::new("INVALID_SIGNATURE", "Notification signature is invalid"),
            ),
            NotificationApiError::MalformedPayload(reason) => {
                tracing::warn!(reason = %reason, "Notification body is not JSON");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new("MALFORMED_PAYLOAD", "Notification body must be JSON"),
                )
            }
            NotificationApiError::Sink(err) => {
                tracing::error!(error = %err, "Failed to process notification");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("INTERNAL_ERROR", "Failed to process notification"),
                )
            }
        };
        (status, Json(error)).into_response()
    }
}
