//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `gateway` - HTTP transports (reqwest, in-memory mock)
//! - `identity` - Request id generators and clocks
//! - `validation` - Payment request validation
//! - `notifications` - Axum endpoint for signed gateway notifications

pub mod gateway;
pub mod identity;
pub mod notifications;
pub mod validation;

pub use gateway::{MockHttpTransport, ReqwestTransport};
pub use identity::{FixedClock, SequentialRequestIds, SystemClock, UuidRequestIdGenerator};
pub use notifications::{notification_router, LoggingNotificationSink, NotificationAppState};
pub use validation::PaymentRequestSchemaValidator;
