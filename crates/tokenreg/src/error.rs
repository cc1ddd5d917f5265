//! Error types for the registry orchestration.

use std::path::PathBuf;
use thiserror::Error;

use tokenreg_store::StoreError;

/// Errors that can occur during registry operations.
///
/// Structural violations are not errors: check mode collects them as data.
/// These variants cover genuine operational failures.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Storage error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// A descriptor file could not be parsed for reformatting.
    #[error("descriptor at '{}' is not valid JSON: {}", .path.display(), .source)]
    DescriptorInvalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// One or more spawned workers failed; collected after all were joined.
    #[error("worker task failed: {0}")]
    TaskJoin(String),
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
