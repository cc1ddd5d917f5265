//! Error types for the store module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The chain's asset root directory does not exist.
    ///
    /// Callers surface this as a single chain-level violation rather than
    /// aborting the whole run.
    #[error("missing asset root at path '{}'", .0.display())]
    AssetRootMissing(PathBuf),

    /// A move could not be carried out.
    #[error("move failed from '{}' to '{}': {}", .from.display(), .to.display(), .source)]
    MoveFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A move was refused because the target path is already occupied.
    #[error("move from '{}' refused, target already exists at '{}'", .from.display(), .to.display())]
    TargetExists { from: PathBuf, to: PathBuf },

    /// The path does not exist.
    #[error("no such path: '{}'", .0.display())]
    NotFound(PathBuf),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
