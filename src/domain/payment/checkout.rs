//! Checkout request body sent to the gateway.

use serde::Serialize;

use super::request::PaymentRequest;

/// Payment-creation endpoint path. Also the signed `Request-Target`.
pub const CHECKOUT_PATH: &str = "/checkout/v1/payment";

pub const CURRENCY: &str = "IDR";

pub const COUNTRY: &str = "ID";

pub const DEFAULT_EXPIRED_TIME_MINUTES: u32 = 60;

/// Payment methods offered when the caller does not restrict them.
pub const SUPPORTED_PAYMENT_METHODS: [&str; 18] = [
    "VIRTUAL_ACCOUNT_BCA",
    "VIRTUAL_ACCOUNT_BANK_MANDIRI",
    "VIRTUAL_ACCOUNT_BANK_SYARIAH_MANDIRI",
    "VIRTUAL_ACCOUNT_DOKU",
    "VIRTUAL_ACCOUNT_BRI",
    "VIRTUAL_ACCOUNT_BNI",
    "VIRTUAL_ACCOUNT_BANK_PERMATA",
    "VIRTUAL_ACCOUNT_BANK_CIMB",
    "VIRTUAL_ACCOUNT_BANK_DANAMON",
    "ONLINE_TO_OFFLINE_ALFA",
    "CREDIT_CARD",
    "DIRECT_DEBIT_BRI",
    "EMONEY_SHOPEEPAY",
    "EMONEY_OVO",
    "EMONEY_DANA",
    "QRIS",
    "PEER_TO_PEER_AKULAKU",
    "PEER_TO_PEER_KREDIVO",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutBody {
    pub order: CheckoutOrder,
    pub payment: CheckoutPayment,
    pub customer: CheckoutCustomer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutOrder {
    pub amount: i64,
    pub invoice_number: String,
    pub currency: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutPayment {
    /// Minutes until the payment page expires.
    pub payment_due_date: u32,
    pub payment_method_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutCustomer {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub country: &'static str,
}

/// Shapes a validated request into the gateway's order/payment/customer body.
///
/// Customers without an email are identified as `GUEST-` plus the first
/// eight characters of the request id.
pub fn build_checkout_body(
    request: &PaymentRequest,
    request_id: &str,
    default_callback_url: Option<&str>,
) -> CheckoutBody {
    let payment_method_types = match &request.payment_method_types {
        Some(methods) if !methods.is_empty() => methods.clone(),
        _ => SUPPORTED_PAYMENT_METHODS
            .iter()
            .map(|m| m.to_string())
            .collect(),
    };

    let customer_id = match &request.customer_email {
        Some(email) if !email.is_empty() => email.clone(),
        _ => format!("GUEST-{}", request_id.chars().take(8).collect::<String>()),
    };

    CheckoutBody {
        order: CheckoutOrder {
            amount: request.amount,
            invoice_number: request.invoice_number.clone(),
            currency: CURRENCY,
            callback_url: request
                .callback_url
                .clone()
                .or_else(|| default_callback_url.map(str::to_string)),
        },
        payment: CheckoutPayment {
            payment_due_date: request
                .expired_time
                .unwrap_or(DEFAULT_EXPIRED_TIME_MINUTES),
            payment_method_types,
        },
        customer: CheckoutCustomer {
            id: customer_id,
            name: request.customer_name.clone(),
            phone: request.customer_phone.clone(),
            country: COUNTRY,
        },
    }
}
