//! NotificationSink port - receives gateway notifications that passed signature checks.
//!
//! Payloads are forwarded as opaque JSON; interpreting the individual
//! notification shapes is up to the sink.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// A notification whose signature has been verified.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedNotification {
    pub client_id: String,
    pub request_id: String,
    pub timestamp: String,
    pub payload: Value,
}

#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    /// The sink could not process the notification right now.
    #[error("Notification sink unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn deliver(&self, notification: VerifiedNotification) -> Result<(), NotificationError>;
}
