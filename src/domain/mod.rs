//! Domain layer containing the payment and signing rules.
//!
//! # Module Organization
//!
//! - `signature` - Canonical string, body digest, HMAC signing and verification
//! - `payment` - Credentials, payment requests, checkout bodies and results

pub mod payment;
pub mod signature;
