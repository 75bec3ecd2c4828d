//! Lease Cache - A bounded, thread-safe in-memory cache
//!
//! Combines insertion-order capacity eviction with lazily checked lease
//! (TTL) expiration.
//!
//! ```
//! use lease_cache::{LeaseCache, CACHE_FOREVER};
//!
//! let cache: LeaseCache<u32, &str> = LeaseCache::new(5, CACHE_FOREVER).unwrap();
//! assert_eq!(cache.put(123, "Val 1"), None);
//! assert_eq!(cache.put(123, "Val 2"), Some("Val 1"));
//! assert_eq!(cache.get(&123), Some("Val 2"));
//! assert_eq!(cache.size(), 1);
//! ```

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{
    CacheEntry, CacheStats, CacheStore, Clock, Lease, LeaseCache, ManualClock, SystemClock,
    CACHE_FOREVER,
};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
