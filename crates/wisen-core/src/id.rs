//! Timestamp-derived entity identifiers.
//!
//! Ids are the current Unix time in milliseconds rendered as decimal text.
//! The generator never hands out the same value twice: when two ids are
//! requested within the same millisecond the second one is bumped forward.

use std::sync::atomic::{AtomicI64, Ordering};

/// Mints unique, timestamp-derived ids for new entities.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next id.
    pub fn next_id(&self) -> String {
        let now = chrono::Utc::now().timestamp_millis();
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(prev + 1);
            match self
                .last
                .compare_exchange(prev, candidate, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return candidate.to_string(),
                Err(actual) => prev = actual,
            }
        }
    }
}
