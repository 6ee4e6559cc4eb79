//! Input validation adapters.

mod payment_request_validator;

pub use payment_request_validator::PaymentRequestSchemaValidator;
