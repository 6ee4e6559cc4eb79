//! Payment gateway configuration

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use crate::application::RetryPolicy;
use crate::domain::payment::{Credentials, Environment};

/// Payment gateway configuration (DOKU Checkout)
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Merchant client id
    pub client_id: String,

    /// Shared secret key used for request signing
    pub secret_key: SecretString,

    /// Use the production host instead of sandbox
    #[serde(default)]
    pub is_production: bool,

    /// Retries after the first attempt on transient failures
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Fixed wait between retries, in milliseconds
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,

    /// Per-attempt request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Callback URL applied when a payment request has none
    pub callback_url: Option<String>,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            secret_key: SecretString::new(String::new()),
            is_production: false,
            max_retries: default_max_retries(),
            retry_backoff_ms: default_retry_backoff_ms(),
            request_timeout_secs: default_request_timeout(),
            callback_url: None,
        }
    }
}

impl PaymentConfig {
    pub fn environment(&self) -> Environment {
        Environment::from_production_flag(self.is_production)
    }

    /// Builds the immutable credential set handed to the payment client.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(
            self.client_id.as_str(),
            self.secret_key.expose_secret().as_str(),
            self.environment(),
        )
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.max_retries,
            Duration::from_millis(self.retry_backoff_ms),
        )
    }

    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.client_id.trim().is_empty() {
            return Err(ValidationError::MissingRequired("PAYMENT__CLIENT_ID"));
        }
        if self.secret_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("PAYMENT__SECRET_KEY"));
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if let Some(url) = &self.callback_url {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(ValidationError::InvalidCallbackUrl);
            }
        }
        Ok(())
    }
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_backoff_ms() -> u64 {
    1000
}

fn default_request_timeout() -> u64 {
    30
}
