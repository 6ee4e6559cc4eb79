//! Sources of per-request identity: request ids and the current time.

use chrono::{DateTime, Utc};

/// Generates a unique id for every outbound request.
pub trait RequestIdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Supplies the current UTC time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
