//! In-memory implementation of the FileStore trait.
//!
//! This is primarily for testing. It has the same semantics as the disk
//! backend but keeps everything in memory with no persistence. BTree
//! containers keep enumeration deterministic.

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::{Result, StoreError};
use crate::traits::FileStore;

/// In-memory store implementation.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock.
pub struct MemoryStore {
    inner: RwLock<MemoryStoreInner>,
}

struct MemoryStoreInner {
    /// Every directory in the tree.
    dirs: BTreeSet<PathBuf>,

    /// File contents indexed by path.
    files: BTreeMap<PathBuf, String>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryStoreInner {
                dirs: BTreeSet::new(),
                files: BTreeMap::new(),
            }),
        }
    }

    /// Create a directory, including all ancestors.
    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.write().unwrap();
        insert_with_ancestors(&mut inner.dirs, path.into());
    }

    /// Create a file with the given contents, including ancestor directories.
    pub fn add_file(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        if let Some(parent) = path.parent() {
            insert_with_ancestors(&mut inner.dirs, parent.to_path_buf());
        }
        inner.files.insert(path, contents.into());
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn insert_with_ancestors(dirs: &mut BTreeSet<PathBuf>, path: PathBuf) {
    for ancestor in path.ancestors() {
        if ancestor.as_os_str().is_empty() {
            continue;
        }
        dirs.insert(ancestor.to_path_buf());
    }
}

/// Move `path` from under `from` to the same position under `to`.
fn rebase(path: &Path, from: &Path, to: &Path) -> PathBuf {
    let tail = path.strip_prefix(from).expect("prefix checked by caller");
    to.join(tail)
}

#[async_trait]
impl FileStore for MemoryStore {
    async fn list_dirs(&self, path: &Path) -> Result<Vec<String>> {
        let inner = self.inner.read().unwrap();
        if !inner.dirs.contains(path) {
            return Err(StoreError::NotFound(path.to_path_buf()));
        }
        Ok(inner
            .dirs
            .iter()
            .filter(|d| d.parent() == Some(path))
            .filter_map(|d| d.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect())
    }

    async fn list_files(&self, path: &Path) -> Result<Vec<String>> {
        let inner = self.inner.read().unwrap();
        if !inner.dirs.contains(path) {
            return Err(StoreError::NotFound(path.to_path_buf()));
        }
        Ok(inner
            .files
            .keys()
            .filter(|f| f.parent() == Some(path))
            .filter_map(|f| f.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect())
    }

    async fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.dirs.contains(path) || inner.files.contains_key(path)
    }

    async fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        let mut inner = self.inner.write().unwrap();

        if inner.dirs.contains(to) || inner.files.contains_key(to) {
            return Err(StoreError::TargetExists {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
            });
        }

        if let Some(contents) = inner.files.remove(from) {
            inner.files.insert(to.to_path_buf(), contents);
            return Ok(());
        }

        if inner.dirs.contains(from) {
            let moved_dirs: Vec<PathBuf> = inner
                .dirs
                .iter()
                .filter(|d| d.starts_with(from))
                .cloned()
                .collect();
            for dir in moved_dirs {
                inner.dirs.remove(&dir);
                let new_dir = rebase(&dir, from, to);
                inner.dirs.insert(new_dir);
            }

            let moved_files: Vec<PathBuf> = inner
                .files
                .keys()
                .filter(|f| f.starts_with(from))
                .cloned()
                .collect();
            for file in moved_files {
                let contents = inner.files.remove(&file).expect("key just listed");
                inner.files.insert(rebase(&file, from, to), contents);
            }
            return Ok(());
        }

        Err(StoreError::NotFound(from.to_path_buf()))
    }

    async fn read_to_string(&self, path: &Path) -> Result<String> {
        let inner = self.inner.read().unwrap();
        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(path.to_path_buf()))
    }

    async fn write_string(&self, path: &Path, contents: &str) -> Result<()> {
        let mut inner = self.inner.write().unwrap();
        if let Some(parent) = path.parent() {
            insert_with_ancestors(&mut inner.dirs, parent.to_path_buf());
        }
        inner.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_basic() {
        let store = MemoryStore::new();
        store.add_file("/reg/a/logo.png", "img");
        store.add_dir("/reg/b");

        let mut dirs = store.list_dirs(Path::new("/reg")).await.unwrap();
        dirs.sort();
        assert_eq!(dirs, vec!["a", "b"]);

        let files = store.list_files(Path::new("/reg/a")).await.unwrap();
        assert_eq!(files, vec!["logo.png"]);

        assert!(store.exists(Path::new("/reg/a/logo.png")).await);
        assert!(!store.exists(Path::new("/reg/c")).await);
    }

    #[tokio::test]
    async fn test_list_missing_dir_fails() {
        let store = MemoryStore::new();
        let err = store.list_dirs(Path::new("/nope")).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_rename_file() {
        let store = MemoryStore::new();
        store.add_file("/reg/a/logo.jpg", "img");

        store
            .rename(Path::new("/reg/a/logo.jpg"), Path::new("/reg/a/logo.png"))
            .await
            .unwrap();

        assert!(!store.exists(Path::new("/reg/a/logo.jpg")).await);
        assert_eq!(
            store.read_to_string(Path::new("/reg/a/logo.png")).await.unwrap(),
            "img"
        );
    }

    #[tokio::test]
    async fn test_rename_directory_moves_subtree() {
        let store = MemoryStore::new();
        store.add_file("/reg/old/logo.png", "img");
        store.add_file("/reg/old/info.json", "{}");

        store.rename(Path::new("/reg/old"), Path::new("/reg/new")).await.unwrap();

        assert!(!store.exists(Path::new("/reg/old")).await);
        assert!(store.exists(Path::new("/reg/new/logo.png")).await);
        assert_eq!(
            store.read_to_string(Path::new("/reg/new/info.json")).await.unwrap(),
            "{}"
        );
    }

    #[tokio::test]
    async fn test_rename_refuses_existing_target() {
        let store = MemoryStore::new();
        store.add_dir("/reg/a");
        store.add_dir("/reg/b");

        let err = store
            .rename(Path::new("/reg/a"), Path::new("/reg/b"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::TargetExists { .. }));
        assert!(store.exists(Path::new("/reg/a")).await);
    }

    #[tokio::test]
    async fn test_rename_missing_source_fails() {
        let store = MemoryStore::new();
        let err = store
            .rename(Path::new("/reg/a"), Path::new("/reg/b"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_write_creates_ancestors() {
        let store = MemoryStore::new();
        store
            .write_string(Path::new("/reg/x/info.json"), "{}\n")
            .await
            .unwrap();
        assert!(store.exists(Path::new("/reg/x")).await);
        let dirs = store.list_dirs(Path::new("/reg")).await.unwrap();
        assert_eq!(dirs, vec!["x"]);
    }
}
