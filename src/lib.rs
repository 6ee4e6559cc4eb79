//! DOKU Checkout - signed client for a hosted payment page.
//!
//! This crate creates checkout sessions on the DOKU payment gateway with
//! HMAC-SHA256 request signing and bounded retries, and verifies the
//! signature of notifications the gateway sends back.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
