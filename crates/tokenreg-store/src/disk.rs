//! Disk implementation of the FileStore trait.
//!
//! This is the primary backend. All operations go through `tokio::fs`.

use async_trait::async_trait;
use std::path::Path;

use crate::error::{Result, StoreError};
use crate::traits::FileStore;

/// Disk-backed store implementation.
///
/// Stateless: paths passed to the trait methods are used as-is, so one
/// instance can serve any number of registry roots.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskStore;

impl DiskStore {
    /// Create a disk store.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileStore for DiskStore {
    async fn list_dirs(&self, path: &Path) -> Result<Vec<String>> {
        let mut entries = tokio::fs::read_dir(path).await?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }

    async fn list_files(&self, path: &Path) -> Result<Vec<String>> {
        let mut entries = tokio::fs::read_dir(path).await?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }

    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }

    async fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        if self.exists(to).await {
            return Err(StoreError::TargetExists {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
            });
        }
        tracing::debug!(from = %from.display(), to = %to.display(), "rename");
        tokio::fs::rename(from, to)
            .await
            .map_err(|source| StoreError::MoveFailed {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
                source,
            })
    }

    async fn read_to_string(&self, path: &Path) -> Result<String> {
        Ok(tokio::fs::read_to_string(path).await?)
    }

    async fn write_string(&self, path: &Path, contents: &str) -> Result<()> {
        Ok(tokio::fs::write(path, contents).await?)
    }
}
