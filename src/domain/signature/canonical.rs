//! Canonical string rendering.

/// Facts about a single outbound request that get signed.
///
/// Built fresh for every call and never reused across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignableRequest {
    pub client_id: String,
    pub request_id: String,
    pub timestamp: String,
    pub target_path: String,
    pub body_digest: String,
}

impl SignableRequest {
    /// Renders this request as the canonical string.
    pub fn canonical(&self) -> String {
        canonical_string(
            &self.client_id,
            &self.request_id,
            &self.timestamp,
            &self.target_path,
            &self.body_digest,
        )
    }
}

/// Renders the newline-joined canonical string.
///
/// Field order is fixed. The `Digest` line is omitted when `digest` is empty.
pub fn canonical_string(
    client_id: &str,
    request_id: &str,
    timestamp: &str,
    target_path: &str,
    digest: &str,
) -> String {
    let mut lines = vec![
        format!("Client-Id:{}", client_id),
        format!("Request-Id:{}", request_id),
        format!("Request-Timestamp:{}", timestamp),
        format!("Request-Target:{}", target_path),
    ];

    if !digest.is_empty() {
        lines.push(format!("Digest:{}", digest));
    }

    lines.join("\n")
}
