//! Lease Module
//!
//! Time-based expiration policy applied to every entry of a cache.

use std::time::Duration;

// == Public Constants ==
/// Lease argument that disables expiry; entries leave only by eviction,
/// removal or clear.
pub const CACHE_FOREVER: i64 = -1;

// == Lease ==
/// How long an entry may be returned after it was put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lease {
    /// Entries never expire
    #[default]
    Forever,
    /// Entries expire once older than this many milliseconds
    Millis(u64),
}

impl Lease {
    /// Builds a lease from a millisecond count. Any negative value means
    /// `Forever`, matching `CACHE_FOREVER`.
    pub fn from_millis(ms: i64) -> Self {
        u64::try_from(ms).map_or(Lease::Forever, Lease::Millis)
    }

    /// Returns the millisecond form, `CACHE_FOREVER` for `Forever`.
    pub fn as_millis(self) -> i64 {
        match self {
            Lease::Forever => CACHE_FOREVER,
            Lease::Millis(ms) => i64::try_from(ms).unwrap_or(i64::MAX),
        }
    }

    // == Is Expired ==
    /// Checks whether an entry of the given age is past its lease.
    ///
    /// Age is compared in whole milliseconds and the boundary is inclusive:
    /// an entry exactly `ms` old is still valid.
    pub fn is_expired(self, age: Duration) -> bool {
        match self {
            Lease::Forever => false,
            Lease::Millis(ms) => age.as_millis() > u128::from(ms),
        }
    }
}
