//! Gateway response extraction.
//!
//! Successful checkout responses arrive either nested under a `response` key
//! or flat at the top level. Both shapes are tried, nested first.

use serde::Deserialize;
use serde_json::Value;

/// Where the checkout payload sits in a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseEnvelope {
    /// `{"response": {"order": ..., "payment": ...}}`
    Nested,
    /// `{"order": ..., "payment": ...}`
    Flat,
}

impl ResponseEnvelope {
    /// Envelopes in the order they are tried.
    pub const EXTRACTION_ORDER: [ResponseEnvelope; 2] =
        [ResponseEnvelope::Nested, ResponseEnvelope::Flat];

    fn payload<'a>(&self, body: &'a Value) -> Option<&'a Value> {
        match self {
            ResponseEnvelope::Nested => body.get("response"),
            ResponseEnvelope::Flat => Some(body),
        }
    }

    /// Extracts the checkout summary assuming this envelope shape.
    pub fn extract(&self, body: &Value) -> Option<CheckoutSummary> {
        let payload = self.payload(body)?;
        let parsed = CheckoutPayload::deserialize(payload).ok()?;
        parsed.into_summary()
    }
}

/// Fields of a successful checkout the caller needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSummary {
    pub payment_url: String,
    pub invoice_number: String,
    pub amount: Option<i64>,
}

impl CheckoutSummary {
    /// Tries each envelope in [`ResponseEnvelope::EXTRACTION_ORDER`].
    ///
    /// Returns `None` if neither shape carries both a payment URL and an
    /// invoice number.
    pub fn from_response(body: &Value) -> Option<(ResponseEnvelope, CheckoutSummary)> {
        ResponseEnvelope::EXTRACTION_ORDER
            .iter()
            .find_map(|envelope| envelope.extract(body).map(|summary| (*envelope, summary)))
    }
}

#[derive(Debug, Deserialize)]
struct CheckoutPayload {
    #[serde(default)]
    order: Option<OrderSection>,
    #[serde(default)]
    payment: Option<PaymentSection>,
}

#[derive(Debug, Deserialize)]
struct OrderSection {
    #[serde(default)]
    invoice_number: Option<String>,
    #[serde(default)]
    amount: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct PaymentSection {
    #[serde(default)]
    url: Option<String>,
}

impl CheckoutPayload {
    fn into_summary(self) -> Option<CheckoutSummary> {
        let order = self.order?;
        let payment_url = self.payment?.url.filter(|u| !u.is_empty())?;
        let invoice_number = order.invoice_number.filter(|i| !i.is_empty())?;

        // Amounts come back as either numbers or numeric strings.
        let amount = match order.amount {
            Some(Value::Number(n)) => n.as_i64(),
            Some(Value::String(s)) => s.parse().ok(),
            _ => None,
        };

        Some(CheckoutSummary {
            payment_url,
            invoice_number,
            amount,
        })
    }
}

/// Best-effort error message from a gateway error body.
///
/// Looks at `error.message`, then `message` as a string or list of strings.
pub fn provider_error_message(body: &Value) -> Option<String> {
    if let Some(message) = body
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
    {
        return Some(message.to_string());
    }

    match body.get("message") {
        Some(Value::String(message)) if !message.is_empty() => Some(message.clone()),
        Some(Value::Array(messages)) => {
            let joined = messages
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            (!joined.is_empty()).then_some(joined)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_nested_envelope() {
        let body = json!({
            "message": ["SUCCESS"],
            "response": {
                "order": { "amount": "25000", "invoice_number": "INV-1" },
                "payment": { "url": "https://pay.example/abc" }
            }
        });

        let (envelope, summary) = CheckoutSummary::from_response(&body).unwrap();
        assert_eq!(envelope, ResponseEnvelope::Nested);
        assert_eq!(summary.payment_url, "https://pay.example/abc");
        assert_eq!(summary.invoice_number, "INV-1");
        assert_eq!(summary.amount, Some(25000));
    }

    #[test]
    fn falls_back_to_flat_envelope() {
        let body = json!({
            "order": { "amount": 25000, "invoice_number": "INV-2" },
            "payment": { "url": "https://pay.example/def" }
        });

        let (envelope, summary) = CheckoutSummary::from_response(&body).unwrap();
        assert_eq!(envelope, ResponseEnvelope::Flat);
        assert_eq!(summary.invoice_number, "INV-2");
        assert_eq!(summary.amount, Some(25000));
    }

    #[test]
    fn falls_back_to_flat_when_nested_is_incomplete() {
        let body = json!({
            "response": { "order": { "invoice_number": "INV-X" } },
            "order": { "invoice_number": "INV-3" },
            "payment": { "url": "https://pay.example/ghi" }
        });

        let (envelope, summary) = CheckoutSummary::from_response(&body).unwrap();
        assert_eq!(envelope, ResponseEnvelope::Flat);
        assert_eq!(summary.invoice_number, "INV-3");
        assert_eq!(summary.amount, None);
    }

    #[test]
    fn returns_none_when_no_envelope_matches() {
        assert!(CheckoutSummary::from_response(&json!({ "status": "ok" })).is_none());
        assert!(CheckoutSummary::from_response(&json!("SUCCESS")).is_none());
    }

    #[test]
    fn reads_error_message_object() {
        let body = json!({ "error": { "code": "invalid_parameter", "message": "amount is invalid" } });
        assert_eq!(provider_error_message(&body).as_deref(), Some("amount is invalid"));
    }

    #[test]
    fn reads_message_list() {
        let body = json!({ "message": ["invoice_number already used", "try again"] });
        assert_eq!(
            provider_error_message(&body).as_deref(),
            Some("invoice_number already used, try again")
        );
    }

    #[test]
    fn empty_error_message_falls_through() {
        assert!(provider_error_message(&json!({ "error": { "message": "" } })).is_none());

        let body = json!({ "error": { "message": "" }, "message": "Duplicate invoice" });
        assert_eq!(provider_error_message(&body).as_deref(), Some("Duplicate invoice"));
    }

    #[test]
    fn no_message_available() {
        assert!(provider_error_message(&json!({})).is_none());
        assert!(provider_error_message(&json!({ "message": [] })).is_none());
    }
}
