//! Cache Store Module
//!
//! Response cache combining HashMap storage, insertion-order tracking and
//! TTL expiration.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, Clock, InsertionOrder, LookupOutcome, SystemClock};
use crate::cache::{CACHE_TTL_MS, MAX_ENTRIES};

// == Cache Store ==
/// In-memory cache of upstream JSON responses.
///
/// Reads evict expired entries lazily. Writes of new keys into a full store
/// first sweep expired entries, then evict the single oldest-inserted entry
/// if the store is still full. Reads never change eviction order.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// First-insertion order of keys
    order: InsertionOrder,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// Lifetime of every entry in milliseconds
    ttl_ms: u64,
    /// Time source
    clock: Arc<dyn Clock>,
}

impl CacheStore {
    // == Constructors ==
    /// Creates a store with the standard limits on the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates a store with the standard limits on the given clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::with_limits(MAX_ENTRIES, CACHE_TTL_MS, clock)
    }

    /// Creates a store with explicit capacity and TTL.
    ///
    /// `max_entries` is clamped to at least 1.
    pub fn with_limits(max_entries: usize, ttl_ms: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            stats: CacheStats::new(),
            max_entries: max_entries.max(1),
            ttl_ms,
            clock,
        }
    }

    // == Get ==
    /// Returns the cached value for `key` if it has not expired.
    ///
    /// An expired entry is removed before `None` is returned.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        let now = self.clock.now_ms();

        match self.entries.get(key) {
            Some(entry) if !entry.is_expired(now) => {
                let value = entry.value.clone();
                debug!(key, ttl_remaining_ms = entry.ttl_remaining_ms(now), "cache hit");
                self.stats.record_lookup(LookupOutcome::Hit);
                Some(value)
            }
            Some(_) => {
                self.remove_entry(key);
                self.stats.record_lookup(LookupOutcome::Expired);
                debug!(key, "cache entry expired on read");
                None
            }
            None => {
                self.stats.record_lookup(LookupOutcome::Miss);
                None
            }
        }
    }

    // == Set ==
    /// Stores `value` under `key` for one TTL from now.
    ///
    /// Overwriting an existing key resets its expiry but keeps its place in
    /// the eviction order. Inserting a new key into a full store sweeps
    /// expired entries and then, if still full, evicts exactly one entry:
    /// the oldest inserted.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        let now = self.clock.now_ms();
        let entry = CacheEntry::new(value, now, self.ttl_ms);

        if let Some(existing) = self.entries.get_mut(&key) {
            *existing = entry;
            return;
        }

        if self.entries.len() >= self.max_entries {
            let swept = self.sweep_expired(now);
            if swept > 0 {
                debug!(swept, "swept expired cache entries");
            }

            if self.entries.len() >= self.max_entries {
                if let Some(oldest) = self.order.pop_oldest() {
                    self.entries.remove(&oldest);
                    self.stats.record_eviction();
                    debug!(key = %oldest, "evicted oldest cache entry");
                }
            }
        }

        self.order.push(&key);
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Sweep Expired ==
    /// Removes every entry expired at `now`, returning how many were removed.
    fn sweep_expired(&mut self, now: u64) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.remove_entry(key);
        }

        self.stats.record_sweep(expired_keys.len());
        expired_keys.len()
    }

    fn remove_entry(&mut self, key: &str) {
        self.entries.remove(key);
        self.order.remove(key);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Inspection ==
    /// Number of stored entries, including expired ones not yet removed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `key` is stored, without checking expiry.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}
