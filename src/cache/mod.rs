//! Cache Module
//!
//! In-memory cache of upstream responses with TTL expiration and
//! oldest-first eviction.

mod clock;
mod entry;
mod key;
mod order;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use key::{cache_key, KEY_DELIMITER};
pub use order::InsertionOrder;
pub use stats::{CacheStats, LookupOutcome};
pub use store::CacheStore;

// == Public Constants ==
/// Lifetime of every cached response (5 minutes)
pub const CACHE_TTL_MS: u64 = 5 * 60 * 1000;

/// Maximum number of entries kept after a write
pub const MAX_ENTRIES: usize = 500;
