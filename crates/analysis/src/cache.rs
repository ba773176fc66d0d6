use std::hash::Hash;
use std::time::{Duration, Instant};

use dashmap::DashMap;

struct CacheEntry<V> {
    value: V,
    fetched_at: Instant,
}

/// Generic keyed cache with a shared time-to-live.
///
/// Entries are never proactively evicted; staleness is detected lazily on
/// the next [`get`](Self::get). An entry is valid strictly while
/// `now - fetched_at < ttl`; at exactly `ttl` it is already stale. A miss
/// is a normal signal that the caller must fetch fresh data and call
/// [`set`](Self::set), which unconditionally overwrites.
pub struct TtlCache<K, V> {
    entries: DashMap<K, CacheEntry<V>>,
    ttl: Duration,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Returns the cached value for `key` if present and fresh.
    pub fn get(&self, key: &K) -> Option<V> {
        self.get_at(key, Instant::now())
    }

    /// Stores `value` under `key` with the current timestamp.
    pub fn set(&self, key: K, value: V) {
        self.set_at(key, value, Instant::now());
    }

    fn get_at(&self, key: &K, now: Instant) -> Option<V> {
        let entry = self.entries.get(key)?;
        if now.duration_since(entry.fetched_at) >= self.ttl {
            return None;
        }
        Some(entry.value.clone())
    }

    fn set_at(&self, key: K, value: V, now: Instant) {
        self.entries.insert(
            key,
            CacheEntry {
                value,
                fetched_at: now,
            },
        );
    }
}
