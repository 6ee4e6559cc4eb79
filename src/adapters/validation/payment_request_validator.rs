//! Payment Request Schema Validator - Implementation of PaymentRequestValidator.
//!
//! Validates caller input field by field and collects every violation so the
//! diagnostics returned to the caller are complete.

use crate::domain::payment::{PaymentRequest, SUPPORTED_PAYMENT_METHODS};
use crate::ports::{PaymentRequestValidator, SchemaValidationError};

const MAX_INVOICE_NUMBER_LEN: usize = 64;
const MAX_CUSTOMER_NAME_LEN: usize = 255;
const MIN_PHONE_DIGITS: usize = 5;
const MAX_PHONE_DIGITS: usize = 16;
const MAX_EXPIRED_TIME_MINUTES: u32 = 43_200;

/// Rule-based validator for `PaymentRequest`.
///
/// Stateless; safe to share across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaymentRequestSchemaValidator;

impl PaymentRequestSchemaValidator {
    pub fn new() -> Self {
        Self
    }

    fn validate_amount(&self, amount: i64, errors: &mut Vec<SchemaValidationError>) {
        if amount <= 0 {
            errors.push(SchemaValidationError::OutOfRange {
                field: "amount".to_string(),
                value: amount.to_string(),
                min: "1".to_string(),
                max: i64::MAX.to_string(),
            });
        }
    }

    fn validate_invoice_number(&self, invoice: &str, errors: &mut Vec<SchemaValidationError>) {
        if invoice.trim().is_empty() {
            errors.push(Self::missing("invoiceNumber"));
            return;
        }

        let well_formed = invoice.len() <= MAX_INVOICE_NUMBER_LEN
            && invoice
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if !well_formed {
            errors.push(Self::invalid_format(
                "invoiceNumber",
                "up to 64 letters, digits, '-' or '_'",
            ));
        }
    }

    fn validate_customer_name(&self, name: &str, errors: &mut Vec<SchemaValidationError>) {
        if name.trim().is_empty() {
            errors.push(Self::missing("customerName"));
        } else if name.chars().count() > MAX_CUSTOMER_NAME_LEN {
            errors.push(Self::invalid_format("customerName", "at most 255 characters"));
        }
    }

    fn validate_email(&self, email: &str, errors: &mut Vec<SchemaValidationError>) {
        if !Self::is_valid_email(email) {
            errors.push(Self::invalid_format("customerEmail", "email"));
        }
    }

    fn validate_phone(&self, phone: &str, errors: &mut Vec<SchemaValidationError>) {
        let digits = phone.strip_prefix('+').unwrap_or(phone);
        let well_formed = (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits.len())
            && digits.chars().all(|c| c.is_ascii_digit());

        if !well_formed {
            errors.push(Self::invalid_format("customerPhone", "phone number"));
        }
    }

    fn validate_callback_url(&self, url: &str, errors: &mut Vec<SchemaValidationError>) {
        let has_host = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .map(|rest| !rest.is_empty())
            .unwrap_or(false);

        if !has_host {
            errors.push(Self::invalid_format("callbackUrl", "http(s) URL"));
        }
    }

    fn validate_expired_time(&self, minutes: u32, errors: &mut Vec<SchemaValidationError>) {
        if minutes == 0 || minutes > MAX_EXPIRED_TIME_MINUTES {
            errors.push(SchemaValidationError::OutOfRange {
                field: "expiredTime".to_string(),
                value: minutes.to_string(),
                min: "1".to_string(),
                max: MAX_EXPIRED_TIME_MINUTES.to_string(),
            });
        }
    }

    fn validate_payment_methods(&self, methods: &[String], errors: &mut Vec<SchemaValidationError>) {
        if methods.is_empty() {
            errors.push(Self::invalid_format(
                "paymentMethodTypes",
                "non-empty list of payment methods",
            ));
            return;
        }

        for (index, method) in methods.iter().enumerate() {
            if !SUPPORTED_PAYMENT_METHODS.contains(&method.as_str()) {
                errors.push(Self::invalid_format(
                    &format!("paymentMethodTypes[{}]", index),
                    "supported payment method",
                ));
            }
        }
    }

    // =========================================================================
    // Helper methods
    // =========================================================================

    fn is_valid_email(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        let labels: Vec<&str> = domain.split('.').collect();

        !local.is_empty()
            && !domain.contains('@')
            && !email.chars().any(char::is_whitespace)
            && labels.len() >= 2
            && labels.iter().all(|label| !label.is_empty())
    }

    fn missing(field: &str) -> SchemaValidationError {
        SchemaValidationError::MissingRequired {
            field: field.to_string(),
        }
    }

    fn invalid_format(field: &str, format: &str) -> SchemaValidationError {
        SchemaValidationError::InvalidFormat {
            field: field.to_string(),
            format: format.to_string(),
        }
    }
}

impl PaymentRequestValidator for PaymentRequestSchemaValidator {
    fn validate(&self, request: &PaymentRequest) -> Result<(), SchemaValidationError> {
        let mut errors = Vec::new();

        self.validate_amount(request.amount, &mut errors);
        self.validate_invoice_number(&request.invoice_number, &mut errors);
        self.validate_customer_name(&request.customer_name, &mut errors);

        if let Some(email) = &request.customer_email {
            self.validate_email(email, &mut errors);
        }
        if let Some(phone) = &request.customer_phone {
            self.validate_phone(phone, &mut errors);
        }
        if let Some(url) = &request.callback_url {
            self.validate_callback_url(url, &mut errors);
        }
        if let Some(minutes) = request.expired_time {
            self.validate_expired_time(minutes, &mut errors);
        }
        if let Some(methods) = &request.payment_method_types {
            self.validate_payment_methods(methods, &mut errors);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaValidationError::collect(errors))
        }
    }
}
