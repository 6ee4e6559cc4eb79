//! Notification endpoint - receives signed payment notifications from the gateway.
//!
//! The gateway signs notifications with the same scheme used for outbound
//! requests. Requests whose signature does not verify are rejected with 401
//! before the body is interpreted.

mod dto;
mod handlers;
mod logging_sink;
mod routes;

pub use dto::{AcknowledgeResponse, ErrorResponse};
pub use handlers::{receive_notification, NotificationAppState, NotificationApiError};
pub use logging_sink::LoggingNotificationSink;
pub use routes::notification_router;
