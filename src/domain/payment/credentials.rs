//! Merchant credentials and gateway environment.

use secrecy::{ExposeSecret, SecretString};

/// Gateway environment. Selects the API host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Production,
    #[default]
    Sandbox,
}

impl Environment {
    /// Maps the `is_production` flag onto an environment.
    pub fn from_production_flag(is_production: bool) -> Self {
        if is_production {
            Environment::Production
        } else {
            Environment::Sandbox
        }
    }

    /// API host for this environment.
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => "https://api.doku.com",
            Environment::Sandbox => "https://api-sandbox.doku.com",
        }
    }
}

/// Client id and shared secret issued by the gateway.
///
/// Immutable once built. The secret is only exposed to the signer.
#[derive(Debug, Clone)]
pub struct Credentials {
    client_id: String,
    secret_key: SecretString,
    environment: Environment,
}

impl Credentials {
    pub fn new(
        client_id: impl Into<String>,
        secret_key: impl Into<String>,
        environment: Environment,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            secret_key: SecretString::new(secret_key.into()),
            environment,
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub(crate) fn secret_key(&self) -> &str {
        self.secret_key.expose_secret()
    }
}
