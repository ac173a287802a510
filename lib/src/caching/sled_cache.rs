// lib/src/caching/sled_cache.rs

use std::path::Path;

use log::{debug, info};
use sled::{Db, Tree};

use intake_models::{IntakeError, IntakeResult};

use super::ReferenceCache;
use crate::config::CACHE_TREE_NAME;

/// Cache persisted with sled, so reference lists survive between runs the
/// way browser local storage survives page reloads.
#[derive(Debug, Clone)]
pub struct SledCache {
    db: Db,
    tree: Tree,
}

impl SledCache {
    pub fn open(path: &Path) -> IntakeResult<Self> {
        let db = sled::open(path)?;
        let tree = db.open_tree(CACHE_TREE_NAME)?;
        info!("Opened reference cache at {}", path.display());
        Ok(SledCache { db, tree })
    }
}

impl ReferenceCache for SledCache {
    fn get(&self, key: &str) -> IntakeResult<Option<String>> {
        match self.tree.get(key.as_bytes())? {
            Some(data) => {
                let text = String::from_utf8(data.to_vec()).map_err(|e| {
                    IntakeError::Cache(format!("Cached entry '{}' is not UTF-8: {}", key, e))
                })?;
                Ok(Some(text))
            }
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> IntakeResult<()> {
        self.tree.insert(key.as_bytes(), value.as_bytes())?;
        self.db.flush()?;
        debug!("Cached {} bytes under '{}'", value.len(), key);
        Ok(())
    }

    fn remove(&self, key: &str) -> IntakeResult<()> {
        self.tree.remove(key.as_bytes())?;
        self.db.flush()?;
        Ok(())
    }
}
