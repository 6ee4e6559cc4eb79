//! Response bodies for the notification endpoint.

use serde::Serialize;

/// Body returned when a notification was accepted.
#[derive(Debug, Clone, Serialize)]
pub struct AcknowledgeResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl AcknowledgeResponse {
    pub fn accepted(request_id: impl Into<String>) -> Self {
        Self {
            status: "OK",
            request_id: Some(request_id.into()),
        }
    }
}

/// Standard error response for the notification endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}
