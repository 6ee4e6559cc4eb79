//! Inbound notification signature verification.

use subtle::ConstantTimeEq;
use thiserror::Error;

use super::signer::{digest, sign};

pub const CLIENT_ID_HEADER: &str = "Client-Id";
pub const REQUEST_ID_HEADER: &str = "Request-Id";
pub const REQUEST_TIMESTAMP_HEADER: &str = "Request-Timestamp";
pub const SIGNATURE_HEADER: &str = "Signature";

/// Signature material accompanying an inbound notification.
///
/// `request_target` is never transmitted by the gateway. The receiving side
/// supplies its own endpoint path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InboundSignatureContext {
    pub signature: Option<String>,
    pub timestamp: Option<String>,
    pub request_id: Option<String>,
    pub client_id: Option<String>,
    pub request_target: String,
}

impl InboundSignatureContext {
    /// Pulls the four signature headers out of an HTTP header map.
    ///
    /// Headers that are absent or not valid UTF-8 are left as `None`.
    pub fn from_headers(headers: &http::HeaderMap, request_target: impl Into<String>) -> Self {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };

        Self {
            signature: header(SIGNATURE_HEADER),
            timestamp: header(REQUEST_TIMESTAMP_HEADER),
            request_id: header(REQUEST_ID_HEADER),
            client_id: header(CLIENT_ID_HEADER),
            request_target: request_target.into(),
        }
    }
}

/// Why a notification signature was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationFailure {
    #[error("missing {0} header")]
    MissingField(&'static str),

    #[error("client id does not match configured client")]
    ClientIdMismatch,

    #[error("signature mismatch")]
    SignatureMismatch,
}

/// Returns true iff the inbound signature matches the one recomputed from `body`.
///
/// Every failure path yields `false`; see [`check`] for the reason.
pub fn verify(
    body: &[u8],
    inbound: &InboundSignatureContext,
    expected_client_id: &str,
    secret_key: &str,
) -> bool {
    check(body, inbound, expected_client_id, secret_key).is_ok()
}

/// Verifies an inbound signature, short-circuiting on the first failed check.
///
/// Checks run in order: required headers present, client id matches, then the
/// body is digested and the signature recomputed. Nothing is hashed unless the
/// first two checks pass.
pub fn check(
    body: &[u8],
    inbound: &InboundSignatureContext,
    expected_client_id: &str,
    secret_key: &str,
) -> Result<(), VerificationFailure> {
    let signature = required(&inbound.signature, SIGNATURE_HEADER)?;
    let timestamp = required(&inbound.timestamp, REQUEST_TIMESTAMP_HEADER)?;
    let request_id = required(&inbound.request_id, REQUEST_ID_HEADER)?;
    let client_id = required(&inbound.client_id, CLIENT_ID_HEADER)?;

    if client_id != expected_client_id {
        return Err(VerificationFailure::ClientIdMismatch);
    }

    let expected = sign(
        client_id,
        request_id,
        &inbound.request_target,
        &digest(body),
        secret_key,
        timestamp,
    );

    if expected.as_bytes().ct_eq(signature.as_bytes()).unwrap_u8() != 1 {
        return Err(VerificationFailure::SignatureMismatch);
    }

    Ok(())
}

fn required<'a>(
    value: &'a Option<String>,
    name: &'static str,
) -> Result<&'a str, VerificationFailure> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(VerificationFailure::MissingField(name)),
    }
}
