// ABOUTME: In-memory file store for embedding and tests
// ABOUTME: Holds documents in a path-keyed map behind an async lock

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

use super::error::{Result, StoreError};
use super::FileStore;

#[derive(Debug, Default)]
pub struct MemoryFileStore {
    files: RwLock<HashMap<PathBuf, Vec<u8>>>,
}

impl MemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert used when setting a store up
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.files.get_mut().insert(path.into(), content.into());
        self
    }

    pub async fn insert(&self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) {
        self.files.write().await.insert(path.into(), content.into());
    }

    pub async fn remove(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.write().await.remove(path)
    }

    pub async fn len(&self) -> usize {
        self.files.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.files.read().await.is_empty()
    }
}

#[async_trait]
impl FileStore for MemoryFileStore {
    async fn exists(&self, path: &Path) -> bool {
        self.files.read().await.contains_key(path)
    }

    async fn read(&self, path: &Path) -> Result<Vec<u8>> {
        self.files.read().await.get(path).cloned().ok_or_else(|| {
            StoreError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such document"),
            )
        })
    }
}
