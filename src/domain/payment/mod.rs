//! Payment domain: credentials, checkout request shaping and result normalization.

mod checkout;
mod credentials;
mod request;
mod response;
mod result;

pub use checkout::{
    build_checkout_body, CheckoutBody, CheckoutCustomer, CheckoutOrder, CheckoutPayment,
    CHECKOUT_PATH, COUNTRY, CURRENCY, DEFAULT_EXPIRED_TIME_MINUTES, SUPPORTED_PAYMENT_METHODS,
};
pub use credentials::{Credentials, Environment};
pub use request::PaymentRequest;
pub use response::{provider_error_message, CheckoutSummary, ResponseEnvelope};
pub use result::{PaymentResult, INTERNAL_SERVER_ERROR, PAYMENT_FAILED};
