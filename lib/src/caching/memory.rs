// lib/src/caching/memory.rs

use std::collections::HashMap;
use std::sync::RwLock;

use intake_models::{IntakeError, IntakeResult};

use super::ReferenceCache;

/// Process-scoped cache. Entries live as long as the value does.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned(_: impl std::fmt::Display) -> IntakeError {
    IntakeError::Cache("Memory cache lock poisoned".to_string())
}

impl ReferenceCache for MemoryCache {
    fn get(&self, key: &str) -> IntakeResult<Option<String>> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> IntakeResult<()> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> IntakeResult<()> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_store_and_remove_entries() {
        let cache = MemoryCache::new();
        assert!(cache.get("cities").unwrap().is_none());

        cache.set("cities", "[]").unwrap();
        assert_eq!(cache.get("cities").unwrap().as_deref(), Some("[]"));
        assert_eq!(cache.len(), 1);

        cache.remove("cities").unwrap();
        cache.remove("cities").unwrap();
        assert!(cache.is_empty());
    }
}
