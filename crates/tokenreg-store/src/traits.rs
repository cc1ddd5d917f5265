//! FileStore trait: the abstract interface for registry file access.
//!
//! This trait allows the checker and normalizer to be storage-agnostic.
//! Implementations include the real disk backend and an in-memory fake
//! for tests.

use async_trait::async_trait;
use std::path::Path;

use crate::error::Result;

/// The FileStore trait: async interface over a file tree.
///
/// # Design Notes
///
/// - **Enumeration order**: listing follows backend enumeration order; it
///   is not guaranteed sorted, and callers must not rely on ordering for
///   correctness.
/// - **No-clobber moves**: [`rename`](FileStore::rename) refuses an
///   existing target with `StoreError::TargetExists` instead of silently
///   overwriting it.
/// - **Await before dependent reads**: a completed `rename` is observable
///   by every subsequent call on the same store.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Names of the directories directly under `path`.
    async fn list_dirs(&self, path: &Path) -> Result<Vec<String>>;

    /// Names of the plain files directly under `path`.
    async fn list_files(&self, path: &Path) -> Result<Vec<String>>;

    /// Existence probe for a file or directory.
    async fn exists(&self, path: &Path) -> bool;

    /// Move a file or a whole directory to a new path.
    async fn rename(&self, from: &Path, to: &Path) -> Result<()>;

    /// Read a text file.
    async fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Create or overwrite a text file.
    async fn write_string(&self, path: &Path, contents: &str) -> Result<()>;
}
