//! Shared Cache Module
//!
//! Thread-safe handle over a [`CacheStore`].

use std::borrow::Borrow;
use std::hash::Hash;

use parking_lot::Mutex;

use crate::cache::{CacheStats, CacheStore, Clock, Lease, SystemClock};
use crate::config::CacheConfig;
use crate::error::Result;

// == Lease Cache ==
/// A bounded cache with lease expiration, safe to share between threads.
///
/// Every operation holds one lock for its whole duration, so a put and the
/// eviction it triggers, or a lookup and the expiry it discovers, are
/// observed as a single step. Share it through an `Arc`.
///
/// With a lease of [`crate::CACHE_FOREVER`] entries never expire and `get`
/// returns them for as long as they are present.
#[derive(Debug)]
pub struct LeaseCache<K, V, C = SystemClock> {
    inner: Mutex<CacheStore<K, V, C>>,
}

impl<K, V> LeaseCache<K, V, SystemClock>
where
    K: Eq + Hash,
    V: Clone,
{
    // == Constructor ==
    /// Creates a cache holding at most `capacity` entries, each valid for
    /// `lease_ms` milliseconds after it was put.
    ///
    /// A negative `lease_ms`, conventionally [`crate::CACHE_FOREVER`],
    /// disables expiry. A `capacity` of zero is rejected.
    pub fn new(capacity: usize, lease_ms: i64) -> Result<Self> {
        Self::with_clock(capacity, Lease::from_millis(lease_ms), SystemClock)
    }

    /// Creates a cache from a validated [`CacheConfig`].
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        config.validate()?;
        Self::with_clock(config.capacity, config.lease(), SystemClock)
    }
}

impl<K, V, C> LeaseCache<K, V, C>
where
    K: Eq + Hash,
    V: Clone,
    C: Clock,
{
    /// Creates a cache reading time from `clock`.
    pub fn with_clock(capacity: usize, lease: Lease, clock: C) -> Result<Self> {
        Ok(Self {
            inner: Mutex::new(CacheStore::with_clock(capacity, lease, clock)?),
        })
    }

    /// Returns a copy of the value for `key` if it is present and within its
    /// lease. A lookup that finds the entry expired removes it.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().get(key).cloned()
    }

    /// Stores `value` under `key`, returning the value it replaced.
    pub fn put(&self, key: K, value: V) -> Option<V> {
        self.inner.lock().put(key, value)
    }

    /// Removes `key`, returning its value regardless of lease state.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().remove(key)
    }

    /// Checks whether `key` is physically present, without a lease check.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().contains_key(key)
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Returns the number of present entries. Entries past their lease are
    /// counted until a lookup removes them.
    pub fn size(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn lease(&self) -> Lease {
        self.inner.lock().lease()
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }
}
