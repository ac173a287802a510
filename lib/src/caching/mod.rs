// lib/src/caching/mod.rs

//! Key-value stores for the raw reference JSON, keyed by collection name
//! (`cities`, `specialities`, `doctors`).

pub mod memory;
pub mod sled_cache;

use std::fmt::Debug;
use std::sync::Arc;

use intake_models::IntakeResult;
use log::warn;

use crate::config::{CacheBackend, CacheConfig};

pub use memory::MemoryCache;
pub use sled_cache::SledCache;

pub trait ReferenceCache: Send + Sync + Debug {
    /// Returns the stored text for `key`, if any.
    fn get(&self, key: &str) -> IntakeResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous entry.
    fn set(&self, key: &str, value: &str) -> IntakeResult<()>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> IntakeResult<()>;
}

/// Opens the cache backend selected in configuration. A sled store that
/// cannot be opened (locked by another process, unwritable path) falls back
/// to a process-scoped cache.
pub fn open_cache(config: &CacheConfig) -> Arc<dyn ReferenceCache> {
    match config.backend {
        CacheBackend::Memory => Arc::new(MemoryCache::new()),
        CacheBackend::Sled => match SledCache::open(&config.path) {
            Ok(cache) => Arc::new(cache),
            Err(e) => {
                warn!(
                    "Could not open reference cache at {}: {}; using an in-memory cache",
                    config.path.display(),
                    e
                );
                Arc::new(MemoryCache::new())
            }
        },
    }
}
