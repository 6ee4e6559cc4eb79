//! Request id and clock adapters.

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::ports::{Clock, RequestIdGenerator};

/// Random UUID v4 request ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestIdGenerator;

impl RequestIdGenerator for UuidRequestIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Wall-clock UTC time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a fixed instant, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Hands out a fixed list of ids in order, then `req-<n>`, for tests.
#[derive(Debug, Default)]
pub struct SequentialRequestIds {
    ids: Vec<String>,
    next: AtomicUsize,
}

impl SequentialRequestIds {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            next: AtomicUsize::new(0),
        }
    }
}

impl RequestIdGenerator for SequentialRequestIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        self.ids
            .get(n)
            .cloned()
            .unwrap_or_else(|| format!("req-{}", n))
    }
}
