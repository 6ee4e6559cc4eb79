//! PaymentRequestValidator port - schema validation of caller input.
//!
//! The payment client depends on this trait, while adapters (like
//! PaymentRequestSchemaValidator) provide the rules.

use serde_json::{json, Value};
use thiserror::Error;

use crate::domain::payment::PaymentRequest;

/// Port for validating payment requests before anything is signed or sent.
///
/// # Contract
///
/// Implementations must:
/// - Report every violated rule, not just the first
/// - Never perform I/O
pub trait PaymentRequestValidator: Send + Sync {
    /// Returns `Ok(())` if the request may be sent to the gateway.
    fn validate(&self, request: &PaymentRequest) -> Result<(), SchemaValidationError>;
}

/// Errors that can occur during schema validation.
#[derive(Debug, Clone, Error)]
pub enum SchemaValidationError {
    #[error("Missing required field: {field}")]
    MissingRequired { field: String },

    #[error("Invalid format for field {field}: expected {format}")]
    InvalidFormat { field: String, format: String },

    #[error("Value out of range for field {field}: {value} not in [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: String,
        min: String,
        max: String,
    },

    #[error("Validation errors: {0:?}")]
    Multiple(Vec<SchemaValidationError>),
}

impl SchemaValidationError {
    /// Collapses a list of violations into a single error.
    ///
    /// A single violation is returned as-is rather than wrapped.
    pub fn collect(mut errors: Vec<SchemaValidationError>) -> Self {
        if errors.len() == 1 {
            errors.remove(0)
        } else {
            SchemaValidationError::Multiple(errors)
        }
    }

    /// Name of the offending field, if this is a single violation.
    pub fn field(&self) -> Option<&str> {
        match self {
            SchemaValidationError::MissingRequired { field }
            | SchemaValidationError::InvalidFormat { field, .. }
            | SchemaValidationError::OutOfRange { field, .. } => Some(field),
            SchemaValidationError::Multiple(_) => None,
        }
    }

    /// Get the count of validation errors.
    pub fn error_count(&self) -> usize {
        match self {
            SchemaValidationError::Multiple(errors) => errors.len(),
            _ => 1,
        }
    }

    /// Diagnostic payload: a JSON array of `{field, message}` entries.
    pub fn to_details(&self) -> Value {
        Value::Array(self.detail_entries())
    }

    fn detail_entries(&self) -> Vec<Value> {
        match self {
            SchemaValidationError::Multiple(errors) => {
                errors.iter().flat_map(|e| e.detail_entries()).collect()
            }
            other => vec![json!({
                "field": other.field().unwrap_or_default(),
                "message": other.to_string(),
            })],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_displays_field_name() {
        let err = SchemaValidationError::MissingRequired {
            field: "invoiceNumber".to_string(),
        };
        assert_eq!(err.to_string(), "Missing required field: invoiceNumber");
        assert_eq!(err.field(), Some("invoiceNumber"));
    }

    #[test]
    fn collect_unwraps_single_error() {
        let err = SchemaValidationError::collect(vec![SchemaValidationError::MissingRequired {
            field: "amount".to_string(),
        }]);
        assert_eq!(err.error_count(), 1);
        assert!(!matches!(err, SchemaValidationError::Multiple(_)));
    }

    #[test]
    fn details_list_every_violation() {
        let err = SchemaValidationError::collect(vec![
            SchemaValidationError::MissingRequired {
                field: "customerName".to_string(),
            },
            SchemaValidationError::InvalidFormat {
                field: "customerEmail".to_string(),
                format: "email".to_string(),
            },
        ]);

        let details = err.to_details();
        let entries = details.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["field"], "customerName");
        assert_eq!(entries[1]["field"], "customerEmail");
        assert_eq!(
            entries[1]["message"],
            "Invalid format for field customerEmail: expected email"
        );
    }

    #[test]
    fn single_error_details_is_one_element_array() {
        let err = SchemaValidationError::OutOfRange {
            field: "amount".to_string(),
            value: "0".to_string(),
            min: "1".to_string(),
            max: "9223372036854775807".to_string(),
        };
        assert_eq!(err.to_details().as_array().unwrap().len(), 1);
    }
}
