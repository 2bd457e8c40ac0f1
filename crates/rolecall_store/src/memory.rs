//! In-memory storage backend.

use crate::{ControllerStore, tree};
use rolecall_error::RolecallResult;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

/// Volatile store with the same tree semantics as [`crate::JsonFileStore`].
///
/// Nothing survives a restart; intended for tests and dry runs.
pub struct MemoryStore {
    root: RwLock<Value>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            root: RwLock::new(Value::Object(Map::new())),
        }
    }
}

#[async_trait::async_trait]
impl ControllerStore for MemoryStore {
    async fn init(&self) -> RolecallResult<()> {
        Ok(())
    }

    async fn get(&self, path: &str) -> RolecallResult<Option<String>> {
        let segments = tree::split(path)?;
        Ok(tree::leaf(&*self.root.read().await, &segments))
    }

    async fn set(&self, path: &str, value: &str) -> RolecallResult<()> {
        let segments = tree::split(path)?;
        let mut root = self.root.write().await;
        tree::insert(&mut root, &segments, value)
    }

    async fn remove(&self, path: &str) -> RolecallResult<()> {
        let segments = tree::split(path)?;
        tree::remove(&mut *self.root.write().await, &segments);
        Ok(())
    }

    async fn exists(&self, path: &str) -> RolecallResult<bool> {
        let segments = tree::split(path)?;
        Ok(tree::lookup(&*self.root.read().await, &segments).is_some())
    }

    async fn keys(&self, path: &str) -> RolecallResult<Vec<String>> {
        let root = self.root.read().await;
        if path.is_empty() {
            return Ok(tree::children(&root, &[]));
        }
        let segments = tree::split(path)?;
        Ok(tree::children(&root, &segments))
    }
}
