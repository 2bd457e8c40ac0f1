//! Single-document JSON file storage backend.

use crate::{ControllerStore, tree};
use rolecall_error::{RolecallResult, StoreError, StoreErrorKind};
use serde_json::{Map, Value};
use std::path::PathBuf;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// File-backed store holding the whole hierarchy in one JSON document.
///
/// Every mutation rewrites the document with a temp file + rename so a crash
/// mid-write never leaves a truncated store behind. The document is read
/// once during [`init`](ControllerStore::init) and served from memory
/// afterwards; this process is the only writer.
pub struct JsonFileStore {
    path: PathBuf,
    root: RwLock<Value>,
}

impl JsonFileStore {
    /// Create a store backed by the given file. The file is not touched
    /// until `init` or the first mutation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            root: RwLock::new(Value::Object(Map::new())),
        }
    }

    /// Write the current document atomically.
    async fn persist(&self, root: &Value) -> RolecallResult<()> {
        let rendered = serde_json::to_string_pretty(root).map_err(|e| {
            StoreError::new(StoreErrorKind::WriteFailed(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StoreError::new(StoreErrorKind::WriteFailed(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        // Temp file + rename keeps the write atomic
        let temp_path = self.path.with_extension("tmp");
        tokio::fs::write(&temp_path, rendered).await.map_err(|e| {
            StoreError::new(StoreErrorKind::WriteFailed(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &self.path).await.map_err(|e| {
            StoreError::new(StoreErrorKind::WriteFailed(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            )))
        })?;

        debug!(path = %self.path.display(), "Persisted controller store");
        Ok(())
    }
}

#[async_trait::async_trait]
impl ControllerStore for JsonFileStore {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn init(&self) -> RolecallResult<()> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No existing store file, starting empty");
                return Ok(());
            }
            Err(e) => {
                return Err(StoreError::new(StoreErrorKind::ReadFailed(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
                .into());
            }
        };

        let loaded: Value = serde_json::from_str(&raw).map_err(|e| {
            StoreError::new(StoreErrorKind::ParseFailed(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })?;

        if !loaded.is_object() {
            return Err(StoreError::new(StoreErrorKind::ParseFailed(format!(
                "{}: root is not an object",
                self.path.display()
            )))
            .into());
        }

        info!("Loaded controller store");
        *self.root.write().await = loaded;
        Ok(())
    }

    async fn get(&self, path: &str) -> RolecallResult<Option<String>> {
        let segments = tree::split(path)?;
        Ok(tree::leaf(&*self.root.read().await, &segments))
    }

    async fn set(&self, path: &str, value: &str) -> RolecallResult<()> {
        let segments = tree::split(path)?;
        let mut root = self.root.write().await;
        tree::insert(&mut root, &segments, value)?;
        self.persist(&root).await
    }

    async fn remove(&self, path: &str) -> RolecallResult<()> {
        let segments = tree::split(path)?;
        let mut root = self.root.write().await;
        if tree::remove(&mut root, &segments) {
            self.persist(&root).await?;
        }
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
