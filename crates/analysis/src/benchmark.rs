use std::collections::VecDeque;

use parking_lot::Mutex;

/// Maximum number of historical scores retained (oldest evicted first).
pub const MAX_SCORES: usize = 1000;

/// Minimum history size before a percentile is reported.
const MIN_HISTORY_FOR_PERCENTILE: usize = 10;

/// Bounded FIFO history of past overall scores, used to rank new
/// submissions against historical ones.
///
/// Process-wide shared state: construct once, share via `Arc`. All
/// mutation goes through [`record_and_rank`](Self::record_and_rank), which
/// holds the lock across the whole read-then-append sequence so concurrent
/// requests never observe an inconsistent percentile/append pair. History
/// is in-memory only and lost on restart.
pub struct BenchmarkStore {
    inner: Mutex<Inner>,
    capacity: usize,
}

struct Inner {
    /// Insertion order = chronological.
    history: VecDeque<i64>,
    /// Total recordings ever made; never decremented on eviction.
    total: u64,
}

impl BenchmarkStore {
    pub fn new() -> Self {
        Self::with_capacity(MAX_SCORES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(Inner {
                history: VecDeque::with_capacity(capacity.min(MAX_SCORES)),
                total: 0,
            }),
            capacity,
        }
    }

    /// Ranks `score` against the existing history, then appends it.
    ///
    /// The percentile is the rounded share of historical scores strictly
    /// below `score`; ties do not count, and the new score is not part of
    /// the history it is ranked against. It is absent until the history
    /// holds at least 10 entries before the call.
    ///
    /// Returns `(percentile, total_recorded_after)`.
    pub fn record_and_rank(&self, score: i64) -> (Option<u32>, u64) {
        let mut inner = self.inner.lock();

        let percentile = if inner.history.len() < MIN_HISTORY_FOR_PERCENTILE {
            None
        } else {
            let below = inner.history.iter().filter(|&&s| s < score).count();
            Some((below as f64 / inner.history.len() as f64 * 100.0).round() as u32)
        };

        inner.history.push_back(score);
        inner.total += 1;
        if inner.history.len() > self.capacity {
            inner.history.pop_front();
        }

        (percentile, inner.total)
    }

    /// Total number of scores ever recorded.
    pub fn total(&self) -> u64 {
        self.inner.lock().total
    }

    /// Rounded mean of the retained history, or `None` when empty.
    pub fn average(&self) -> Option<i64> {
        let inner = self.inner.lock();
        if inner.history.is_empty() {
            return None;
        }
        let sum: i64 = inner.history.iter().sum();
        Some((sum as f64 / inner.history.len() as f64).round() as i64)
    }

    /// Current history length (bounded by capacity).
    pub fn history_len(&self) -> usize {
        self.inner.lock().history.len()
    }
}

impl Default for BenchmarkStore {
    fn default() -> Self {
        Self::new()
    }
}
