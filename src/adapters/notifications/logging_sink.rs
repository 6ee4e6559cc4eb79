//! Default sink: records verified notifications in the log and accepts them.

use async_trait::async_trait;

use crate::ports::{NotificationError, NotificationSink, VerifiedNotification};

#[derive(Debug, Clone, Default)]
pub struct LoggingNotificationSink;

impl LoggingNotificationSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationSink for LoggingNotificationSink {
    async fn deliver(&self, notification: VerifiedNotification) -> Result<(), NotificationError> {
        let invoice_number = notification
            .payload
            .pointer("/order/invoice_number")
            .and_then(|v| v.as_str())
            .unwrap_or_default();
        let status = notification
            .payload
            .pointer("/transaction/status")
            .and_then(|v| v.as_str())
            .unwrap_or_default();

        tracing::info!(
            client_id = %notification.client_id,
            request_id = %notification.request_id,
            timestamp = %notification.timestamp,
            invoice_number,
            status,
            "Received payment notification"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn accepts_any_payload() {
        let sink = LoggingNotificationSink::new();
        let result = sink
            .deliver(VerifiedNotification {
                client_id: "MCH-0001".to_string(),
                request_id: "req-1".to_string(),
                timestamp: "2024-01-01T00:00:00Z".to_string(),
                payload: json!({"unexpected": true}),
            })
            .await;
        assert!(result.is_ok());
    }
}
