//! Cache Module
//!
//! Provides in-memory caching with insertion-order eviction and lease expiration.

mod clock;
mod entry;
mod lease;
mod shared;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use lease::{Lease, CACHE_FOREVER};
pub use shared::LeaseCache;
pub use stats::CacheStats;
pub use store::CacheStore;
