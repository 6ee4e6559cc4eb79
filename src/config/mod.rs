//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DOKU` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use doku_checkout::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod payment;
mod server;

pub use error::{ConfigError, ValidationError};
pub use payment::PaymentConfig;
pub use server::ServerConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Notification server configuration (host, port, path)
    #[serde(default)]
    pub server: ServerConfig,

    /// Payment gateway configuration (credentials, environment, retries)
    pub payment: PaymentConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DOKU` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DOKU__PAYMENT__CLIENT_ID=MCH-...` -> `payment.client_id = MCH-...`
    /// - `DOKU__SERVER__PORT=8080` -> `server.port = 8080`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DOKU")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.payment.validate()?;
        Ok(())
    }

    /// Check if payments go to the production gateway
    pub fn is_production(&self) -> bool {
        self.payment.is_production
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var("DOKU__PAYMENT__CLIENT_ID", "MCH-0001");
        env::set_var("DOKU__PAYMENT__SECRET_KEY", "SK-secret");
    }

    fn clear_env() {
        env::remove_var("DOKU__PAYMENT__CLIENT_ID");
        env::remove_var("DOKU__PAYMENT__SECRET_KEY");
        env::remove_var("DOKU__PAYMENT__IS_PRODUCTION");
        env::remove_var("DOKU__PAYMENT__MAX_RETRIES");
        env::remove_var("DOKU__SERVER__PORT");
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.payment.client_id, "MCH-0001");
        assert_eq!(config.payment.secret_key.expose_secret(), "SK-secret");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_when_optional_values_absent() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(!config.is_production());
        assert_eq!(config.payment.max_retries, 3);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.notification_path, "/payments/notifications");
    }

    #[test]
    fn test_production_flag_and_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("DOKU__PAYMENT__IS_PRODUCTION", "true");
        env::set_var("DOKU__PAYMENT__MAX_RETRIES", "5");
        env::set_var("DOKU__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
        assert_eq!(config.payment.max_retries, 5);
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_missing_credentials_fail_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        assert!(AppConfig::load().is_err());
    }
}
