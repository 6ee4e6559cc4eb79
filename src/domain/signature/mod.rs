//! Request signing protocol shared by outbound calls and inbound notifications.
//!
//! Both directions HMAC the same canonical string:
//!
//! ```text
//! Client-Id:<client id>
//! Request-Id:<request id>
//! Request-Timestamp:<ISO-8601 UTC, second precision, trailing Z>
//! Request-Target:<path>
//! Digest:<base64(sha256(body))>
//! ```
//!
//! Lines are joined by `\n` with no trailing newline, and the `Digest` line
//! only appears when the body digest is non-empty. Any deviation changes the
//! signed bytes, so the format here is the protocol.

mod canonical;
mod signer;
mod verifier;

pub use canonical::{canonical_string, SignableRequest};
pub use signer::{digest, sign, SIGNATURE_ALGORITHM_TAG};
pub use verifier::{
    check, verify, InboundSignatureContext, VerificationFailure, CLIENT_ID_HEADER,
    REQUEST_ID_HEADER, REQUEST_TIMESTAMP_HEADER, SIGNATURE_HEADER,
};
