//! Normalized outcome of a payment-creation call.

use serde::Serialize;
use serde_json::Value;

use super::response::CheckoutSummary;

/// Message for every failure that is not a gateway-reported error.
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Fallback when the gateway rejects a request without a readable message.
pub const PAYMENT_FAILED: &str = "Failed to create payment";

/// Exactly one of these is produced per `create_payment` call.
///
/// Serializes to the flat wire shape
/// `{success, paymentUrl?, invoiceNumber?, amount?, message?, details?}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "PaymentResultBody")]
pub enum PaymentResult {
    Success {
        payment_url: String,
        invoice_number: String,
        amount: Option<i64>,
    },
    Failure {
        message: String,
        details: Option<Value>,
    },
}

impl PaymentResult {
    pub fn success(summary: CheckoutSummary) -> Self {
        PaymentResult::Success {
            payment_url: summary.payment_url,
            invoice_number: summary.invoice_number,
            amount: summary.amount,
        }
    }

    pub fn failure(message: impl Into<String>, details: Option<Value>) -> Self {
        PaymentResult::Failure {
            message: message.into(),
            details,
        }
    }

    pub fn internal_error(details: Option<Value>) -> Self {
        Self::failure(INTERNAL_SERVER_ERROR, details)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PaymentResult::Success { .. })
    }

    pub fn payment_url(&self) -> Option<&str> {
        match self {
            PaymentResult::Success { payment_url, .. } => Some(payment_url),
            PaymentResult::Failure { .. } => None,
        }
    }

    pub fn invoice_number(&self) -> Option<&str> {
        match self {
            PaymentResult::Success { invoice_number, .. } => Some(invoice_number),
            PaymentResult::Failure { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            PaymentResult::Success { .. } => None,
            PaymentResult::Failure { message, .. } => Some(message),
        }
    }

    pub fn details(&self) -> Option<&Value> {
        match self {
            PaymentResult::Success { .. } => None,
            PaymentResult::Failure { details, .. } => details.as_ref(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PaymentResultBody {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    payment_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    invoice_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl From<PaymentResult> for PaymentResultBody {
    fn from(result: PaymentResult) -> Self {
        match result {
            PaymentResult::Success {
                payment_url,
                invoice_number,
                amount,
            } => Self {
                success: true,
                payment_url: Some(payment_url),
                invoice_number: Some(invoice_number),
                amount,
                message: None,
                details: None,
            },
            PaymentResult::Failure { message, details } => Self {
                success: false,
                payment_url: None,
                invoice_number: None,
                amount: None,
                message: Some(message),
                details,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_serializes_flat() {
        let result = PaymentResult::success(CheckoutSummary {
            payment_url: "https://pay.example/abc".to_string(),
            invoice_number: "INV-1".to_string(),
            amount: Some(25000),
        });

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "success": true,
                "paymentUrl": "https://pay.example/abc",
                "invoiceNumber": "INV-1",
                "amount": 25000
            })
        );
    }

    #[test]
    fn failure_serializes_message_and_details() {
        let result = PaymentResult::internal_error(Some(json!([{ "field": "amount" }])));

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "success": false,
                "message": "Internal server error",
                "details": [{ "field": "amount" }]
            })
        );
    }

    #[test]
    fn accessors_follow_variant() {
        let failure = PaymentResult::failure("nope", None);
        assert!(!failure.is_success());
        assert_eq!(failure.message(), Some("nope"));
        assert!(failure.payment_url().is_none());
        assert!(failure.details().is_none());
    }
}
