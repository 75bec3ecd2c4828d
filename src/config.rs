//! Configuration Module
//!
//! The two construction parameters of a cache, loadable through serde.

use serde::{Deserialize, Serialize};

use crate::cache::{Lease, CACHE_FOREVER};
use crate::error::{CacheError, Result};

/// Cache construction parameters.
///
/// Missing fields fall back to the defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// Lease time in milliseconds; any negative value (`CACHE_FOREVER`) disables expiry
    pub lease_ms: i64,
}

impl CacheConfig {
    /// Creates a config from explicit values.
    pub fn new(capacity: usize, lease_ms: i64) -> Self {
        Self { capacity, lease_ms }
    }

    /// Returns the lease policy described by `lease_ms`.
    pub fn lease(&self) -> Lease {
        Lease::from_millis(self.lease_ms)
    }

    /// Checks that the config describes a usable cache.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(CacheError::InvalidConfiguration(
                "capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 1000,
            lease_ms: CACHE_FOREVER,
        }
    }
}
