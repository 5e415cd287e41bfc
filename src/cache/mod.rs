//! In-memory cache for CMS payloads
//!
//! One entry per [`ContentKey`]. Entries are never evicted; a read older than
//! the TTL is treated as a miss and the next successful fetch overwrites it.

pub mod clock;

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::client::ContentKey;
pub use clock::{Clock, SystemClock};

/// A cached payload and the time it was stored
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub value: Value,
    pub stored_at: DateTime<Utc>,
}

/// Process-wide payload cache.
///
/// Construct once and share by reference (or `Arc`). Each `set` replaces the
/// whole entry under the lock, so concurrent writers never interleave.
pub struct ContentCache {
    entries: Mutex<HashMap<ContentKey, CacheEntry>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl ContentCache {
    /// Create an empty cache using wall-clock time.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Create an empty cache with an explicit time source.
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    /// Get the payload for `key` if it is still fresh (`age <= ttl`).
    pub fn get(&self, key: ContentKey) -> Option<Value> {
        let now = self.clock.now();
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let entry = entries.get(&key)?;

        // A stored_at in the future (clock skew) counts as fresh.
        let fresh = match (now - entry.stored_at).to_std() {
            Ok(age) => age <= self.ttl,
            Err(_) => true,
        };

        if fresh {
            Some(entry.value.clone())
        } else {
            log::debug!("Cache expired: {}", key);
            None
        }
    }

    /// Store `value` for `key`, stamped with the current time.
    pub fn set(&self, key: ContentKey, value: Value) {
        let entry = CacheEntry {
            value,
            stored_at: self.clock.now(),
        };
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key, entry);
    }
}
