//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with lease support.

use std::time::{Duration, Instant};

use crate::cache::Lease;

// == Cache Entry ==
/// A stored value plus the instant it was put.
///
/// The timestamp is fixed at creation; replacing a value creates a new entry.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped with `inserted_at`.
    pub fn new(value: V, inserted_at: Instant) -> Self {
        Self { value, inserted_at }
    }

    /// Returns the stored value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the entry, returning the stored value.
    pub fn into_value(self) -> V {
        self.value
    }

    /// Returns the instant the entry was created.
    pub fn inserted_at(&self) -> Instant {
        self.inserted_at
    }

    /// Returns how long the entry has existed as of `now`.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.inserted_at)
    }

    // == Is Expired ==
    /// Checks if the entry is past `lease` as of `now`.
    pub fn is_expired(&self, lease: Lease, now: Instant) -> bool {
        lease.is_expired(self.age(now))
    }
}
