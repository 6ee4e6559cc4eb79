//! Application layer - orchestration over domain logic and ports.
//!
//! - `retry` - bounded retry with fixed backoff around a transport call
//! - `payment_client` - checkout creation and notification verification

pub mod payment_client;
pub mod retry;

pub use payment_client::{DokuPaymentClient, PaymentClientError, SignedCheckout};
pub use retry::{execute_with_retry, ResilientTransport, RetryPolicy, StatusResponse};
