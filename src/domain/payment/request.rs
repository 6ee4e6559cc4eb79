//! Caller-supplied payment request.

use serde::{Deserialize, Serialize};

/// Input to `create_payment`, before schema validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Amount in whole Rupiah.
    pub amount: i64,

    pub invoice_number: String,

    pub customer_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,

    /// Where the gateway redirects the customer after payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,

    /// Minutes until the payment page expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expired_time: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method_types: Option<Vec<String>>,
}
