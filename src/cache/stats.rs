//! Cache Statistics Module
//!
//! Counters for lookup outcomes and for why entries left the cache.

/// Result of a single cache read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Live entry returned
    Hit,
    /// Key not stored
    Miss,
    /// Key stored but past its expiry; removed on the spot
    Expired,
}

// == Cache Stats ==
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheStats {
    pub hits: u64,
    /// Includes reads that found an expired entry
    pub misses: u64,
    /// Live entries dropped to make room for a new key
    pub evictions: u64,
    /// Expired entries dropped, on read or by a sweep before eviction
    pub expired_removals: u64,
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_lookup(&mut self, outcome: LookupOutcome) {
        match outcome {
            LookupOutcome::Hit => self.hits += 1,
            LookupOutcome::Miss => self.misses += 1,
            LookupOutcome::Expired => {
                self.misses += 1;
                self.expired_removals += 1;
            }
        }
    }

    pub fn record_sweep(&mut self, removed: usize) {
        self.expired_removals += removed as u64;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }

    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of lookups served from cache; 0.0 before the first lookup.
    pub fn hit_rate(&self) -> f64 {
        match self.lookups() {
            0 => 0.0,
            n => self.hits as f64 / n as f64,
        }
    }
}
