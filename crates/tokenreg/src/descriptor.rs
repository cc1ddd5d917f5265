//! Descriptor seams: the validity predicate and JSON reformatting.
//!
//! Semantic validation of `info.json` is outside this crate's scope; the
//! checker consumes it as an opaque predicate returning a pass flag plus a
//! diagnostic used verbatim in violation reports. The predicate and the
//! formatter are both expressed against the [`FileStore`] seam so tests
//! can substitute fakes.

use async_trait::async_trait;
use std::path::Path;

use tokenreg_core::Chain;
use tokenreg_store::{AssetTree, FileStore};

use crate::error::{RegistryError, Result};

/// Verdict of the descriptor predicate: pass flag plus a human-readable
/// diagnostic. The diagnostic is reported verbatim on failure.
pub type InfoVerdict = (bool, String);

/// The opaque descriptor well-formedness predicate.
#[async_trait]
pub trait AssetInfoValidator<S: FileStore>: Send + Sync {
    /// Judge the descriptor of one asset.
    async fn is_asset_info_ok(
        &self,
        tree: &AssetTree<S>,
        chain: Chain,
        address: &str,
    ) -> InfoVerdict;
}

/// Shipped predicate: a descriptor, when present, must parse as a JSON
/// object. Absence is not a failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicInfoValidator;

#[async_trait]
impl<S: FileStore> AssetInfoValidator<S> for BasicInfoValidator {
    async fn is_asset_info_ok(
        &self,
        tree: &AssetTree<S>,
        chain: Chain,
        address: &str,
    ) -> InfoVerdict {
        let path = tree.info_path(chain, address);
        if !tree.exists(&path).await {
            return (true, String::new());
        }
        let raw = match tree.store().read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) => {
                return (
                    false,
                    format!("Failed to read info file at path '{}': {e}", path.display()),
                )
            }
        };
        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(serde_json::Value::Object(_)) => (true, String::new()),
            Ok(_) => (
                false,
                format!(
                    "Info file at path '{}' must contain a JSON object",
                    path.display()
                ),
            ),
            Err(e) => (
                false,
                format!("Info file at path '{}' is not valid JSON: {e}", path.display()),
            ),
        }
    }
}

/// Rewrite a JSON file in place into canonical formatting.
///
/// Content-preserving except for whitespace and key ordering, and
/// idempotent: the write is skipped when the file is already canonical.
pub async fn format_json_file<S: FileStore>(store: &S, path: &Path) -> Result<()> {
    let raw = store.read_to_string(path).await?;
    let value: serde_json::Value =
        serde_json::from_str(&raw).map_err(|source| RegistryError::DescriptorInvalid {
            path: path.to_path_buf(),
            source,
        })?;
    let mut pretty =
        serde_json::to_string_pretty(&value).map_err(|source| RegistryError::DescriptorInvalid {
            path: path.to_path_buf(),
            source,
        })?;
    pretty.push('\n');
    if pretty != raw {
        store.write_string(path, &pretty).await?;
    }
    Ok(())
}
