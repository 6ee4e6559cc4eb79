//! Body digest and HMAC-SHA256 request signature.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use super::canonical::canonical_string;

type HmacSha256 = Hmac<Sha256>;

/// Algorithm tag prefixed to every signature value.
pub const SIGNATURE_ALGORITHM_TAG: &str = "HMACSHA256=";

/// Base64-encoded SHA-256 of the raw body bytes.
pub fn digest(body: &[u8]) -> String {
    BASE64.encode(Sha256::digest(body))
}

/// Signs a request, returning `HMACSHA256=<base64 mac>`.
///
/// The MAC is keyed by `secret_key` over the canonical string built from the
/// remaining arguments.
pub fn sign(
    client_id: &str,
    request_id: &str,
    target_path: &str,
    digest: &str,
    secret_key: &str,
    timestamp: &str,
) -> String {
    let canonical = canonical_string(client_id, request_id, timestamp, target_path, digest);

    let mut mac =
        HmacSha256::new_from_slice(secret_key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(canonical.as_bytes());

    format!(
        "{}{}",
        SIGNATURE_ALGORITHM_TAG,
        BASE64.encode(mac.finalize().into_bytes())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &[u8] = br#"{"order":{"amount":10000}}"#;

    #[test]
    fn digest_of_empty_body_is_sha256_of_nothing() {
        assert_eq!(digest(b""), "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=");
    }

    #[test]
    fn digest_matches_known_value() {
        assert_eq!(digest(BODY), "+SlYgGoBI3qNtbtd2mRDJUgYSwWFZfTA44htNq7XdEA=");
    }

    #[test]
    fn sign_matches_known_value() {
        let signature = sign(
            "MCH-0001",
            "req-1",
            "/checkout/v1/payment",
            &digest(BODY),
            "SK-secret",
            "2024-01-01T00:00:00Z",
        );
        assert_eq!(
            signature,
            "HMACSHA256=Jlazg9mkiZOrcrTJOXaCTZ8HdFUmAJRHGJ/9VMdr/MI="
        );
    }

    #[test]
    fn signature_carries_algorithm_tag() {
        let signature = sign("c", "r", "/p", "d", "k", "t");
        assert!(signature.starts_with(SIGNATURE_ALGORITHM_TAG));
    }

    #[test]
    fn signature_never_contains_secret() {
        let signature = sign("c", "r", "/p", "d", "super-secret-key", "t");
        assert!(!signature.contains("super-secret-key"));
    }

    #[test]
    fn empty_digest_signs_different_bytes_than_present_digest() {
        let without = sign("c", "r", "/p", "", "k", "t");
        let with = sign("c", "r", "/p", &digest(b""), "k", "t");
        assert_ne!(without, with);
    }

    #[test]
    fn different_secret_gives_different_signature() {
        let a = sign("c", "r", "/p", "d", "key-a", "t");
        let b = sign("c", "r", "/p", "d", "key-b", "t");
        assert_ne!(a, b);
    }
}
