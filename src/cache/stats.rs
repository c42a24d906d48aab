//! Cache Statistics Module
//!
//! Tracks store performance metrics including hits, misses, and writes.

use serde::Serialize;

// == Store Stats ==
/// Tracks file store performance metrics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StoreStats {
    /// Number of reads served from a fresh cache entry
    pub hits: u64,
    /// Number of reads that had to consult the filesystem
    /// (stale or absent entry, missing file, or unreadable content)
    pub misses: u64,
    /// Number of successful write-throughs
    pub writes: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl StoreStats {
    // == Constructor ==
    /// Creates a new StoreStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no reads have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Write ==
    /// Increments the write counter.
    pub fn record_write(&mut self) {
        self.writes += 1;
    }

    // == Update Entry Count ==
    /// Updates the total entries count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
