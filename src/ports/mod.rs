//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Outbound Ports
//!
//! - `HttpTransport` - Sends one HTTP request to the payment gateway
//! - `RequestIdGenerator` - Unique id per outbound request
//! - `Clock` - Source of request timestamps
//!
//! ## Inbound Ports
//!
//! - `PaymentRequestValidator` - Checks payment input before anything is sent
//! - `NotificationSink` - Receives notifications whose signature verified

mod http_transport;
mod notification_sink;
mod payment_request_validator;
mod request_id;

pub use http_transport::{HttpRequest, HttpResponse, HttpTransport, TransportError};
pub use notification_sink::{NotificationError, NotificationSink, VerifiedNotification};
pub use payment_request_validator::{PaymentRequestValidator, SchemaValidationError};
pub use request_id::{Clock, RequestIdGenerator};
