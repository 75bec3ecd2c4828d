//! Cache Store Module
//!
//! Cache engine combining insertion-ordered storage with capacity eviction
//! and lazy lease expiration.

use std::borrow::Borrow;
use std::hash::Hash;

use hashlink::LinkedHashMap;
use tracing::{debug, info};

use crate::cache::{CacheEntry, CacheStats, Clock, Lease, SystemClock};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Unsynchronized cache storage with insertion-order eviction and lease support.
///
/// Entries are kept in insertion order. Overwriting a key keeps its original
/// position, so the eviction candidate is always the key that has been
/// present the longest. Leases are only checked by [`CacheStore::get`].
///
/// Wrap it in [`crate::LeaseCache`] for shared access.
#[derive(Debug)]
pub struct CacheStore<K, V, C = SystemClock> {
    /// Key-value storage, eldest first
    entries: LinkedHashMap<K, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
    /// Expiration policy applied on lookup
    lease: Lease,
    /// Source of entry timestamps
    clock: C,
}

impl<K, V> CacheStore<K, V, SystemClock>
where
    K: Eq + Hash,
{
    // == Constructor ==
    /// Creates a new CacheStore reading the system clock.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries the cache can hold, at least 1
    /// * `lease` - Expiration policy for every entry
    pub fn new(capacity: usize, lease: Lease) -> Result<Self> {
        Self::with_clock(capacity, lease, SystemClock)
    }
}

impl<K, V, C> CacheStore<K, V, C>
where
    K: Eq + Hash,
    C: Clock,
{
    /// Creates a new CacheStore with a custom clock.
    pub fn with_clock(capacity: usize, lease: Lease, clock: C) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidConfiguration(
                "capacity must be at least 1".to_string(),
            ));
        }

        info!(capacity, lease_ms = lease.as_millis(), "cache store created");

        Ok(Self {
            entries: LinkedHashMap::new(),
            stats: CacheStats::new(),
            capacity,
            lease,
            clock,
        })
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns the value if present and within its lease. An entry found past
    /// its lease is removed and reported as a miss. A hit does not refresh
    /// the entry's timestamp or its eviction position.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let now = self.clock.now();
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(self.lease, now),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.entries.remove(key);
            self.stats.record_expiration();
            self.stats.record_miss();
            self.stats.set_total_entries(self.entries.len());
            debug!(remaining = self.entries.len(), "removed entry past its lease");
            return None;
        }

        self.stats.record_hit();
        self.entries.get(key).map(CacheEntry::value)
    }

    // == Put ==
    /// Stores a value, returning the previous value for the key if one was
    /// physically present.
    ///
    /// The new entry is stamped with the current time. A new key goes to the
    /// back of the eviction order; if that takes the store over capacity the
    /// eldest entry is evicted. An existing key is replaced in place and the
    /// previous value is returned even if its lease had already run out.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let entry = CacheEntry::new(value, self.clock.now());
        let previous = self.entries.replace(key, entry);

        if self.entries.len() > self.capacity && self.entries.pop_front().is_some() {
            self.stats.record_eviction();
            debug!(capacity = self.capacity, "evicted eldest entry");
        }

        self.stats.set_total_entries(self.entries.len());
        previous.map(CacheEntry::into_value)
    }

    // == Remove ==
    /// Removes an entry by key, returning its value regardless of lease state.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let removed = self.entries.remove(key).map(CacheEntry::into_value);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Contains Key ==
    /// Checks whether a key is physically present, without a lease check.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    // == Clear ==
    /// Removes every entry.
    pub fn clear(&mut self) {
        let cleared = self.entries.len();
        self.entries.clear();
        self.stats.set_total_entries(0);
        info!(cleared, "cache cleared");
    }

    // == Keys ==
    /// Iterates over present keys, eldest first.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the number of physically present entries, including entries
    /// past their lease that no lookup has touched yet.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn lease(&self) -> Lease {
        self.lease
    }
}
