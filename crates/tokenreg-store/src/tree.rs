//! Read-only view over one chain's asset directory.
//!
//! The registry keeps one tree per chain:
//!
//! ```text
//! <root>/blockchains/<chain>/assets/<address>/logo.png
//! <root>/blockchains/<chain>/assets/<address>/info.json
//! ```
//!
//! `AssetTree` derives these paths and enumerates addresses and asset
//! files. It never mutates the backing store.

use std::path::{Path, PathBuf};

use tokenreg_core::{AssetFile, Chain, INFO_FULL_NAME, LOGO_FULL_NAME};

use crate::error::{Result, StoreError};
use crate::traits::FileStore;

/// Directory under the registry root holding the per-chain trees.
pub const BLOCKCHAINS_DIR: &str = "blockchains";

/// A registry root paired with a file store.
pub struct AssetTree<S> {
    store: S,
    root: PathBuf,
}

impl<S: FileStore> AssetTree<S> {
    /// View the registry rooted at `root` through `store`.
    pub fn new(store: S, root: impl Into<PathBuf>) -> Self {
        Self {
            store,
            root: root.into(),
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The registry root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Path derivation
    // ─────────────────────────────────────────────────────────────────────────

    /// The asset root for a chain.
    pub fn chain_assets_path(&self, chain: Chain) -> PathBuf {
        self.root
            .join(BLOCKCHAINS_DIR)
            .join(chain.dir_name())
            .join("assets")
    }

    /// The directory of one asset.
    pub fn asset_path(&self, chain: Chain, address: &str) -> PathBuf {
        self.chain_assets_path(chain).join(address)
    }

    /// The conventional logo path of one asset.
    pub fn logo_path(&self, chain: Chain, address: &str) -> PathBuf {
        self.asset_path(chain, address).join(LOGO_FULL_NAME)
    }

    /// The descriptor path of one asset.
    pub fn info_path(&self, chain: Chain, address: &str) -> PathBuf {
        self.asset_path(chain, address).join(INFO_FULL_NAME)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Enumeration
    // ─────────────────────────────────────────────────────────────────────────

    /// One entry per top-level subdirectory of the chain's asset root, in
    /// backend enumeration order.
    ///
    /// Fails with [`StoreError::AssetRootMissing`] when the root is absent;
    /// callers turn that into a single chain-level violation.
    pub async fn list_addresses(&self, chain: Chain) -> Result<Vec<String>> {
        let root = self.chain_assets_path(chain);
        if !self.store.exists(&root).await {
            return Err(StoreError::AssetRootMissing(root));
        }
        self.store.list_dirs(&root).await
    }

    /// The files directly inside one asset directory.
    pub async fn list_files(&self, chain: Chain, address: &str) -> Result<Vec<AssetFile>> {
        let dir = self.asset_path(chain, address);
        let names = self.store.list_files(&dir).await?;
        Ok(names.iter().map(|n| AssetFile::from_file_name(n)).collect())
    }

    /// Existence probe, delegated to the store.
    pub async fn exists(&self, path: &Path) -> bool {
        self.store.exists(path).await
    }

    /// Whether the asset carries a descriptor.
    pub async fn has_info(&self, chain: Chain, address: &str) -> bool {
        self.exists(&self.info_path(chain, address)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    const ADDR: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

    #[test]
    fn test_path_derivation() {
        let tree = AssetTree::new(MemoryStore::new(), "/reg");
        assert_eq!(
            tree.chain_assets_path(Chain::Ethereum),
            Path::new("/reg/blockchains/ethereum/assets")
        );
        assert_eq!(
            tree.asset_path(Chain::SmartChain, ADDR),
            Path::new("/reg/blockchains/smartchain/assets").join(ADDR)
        );
        assert_eq!(
            tree.logo_path(Chain::Ethereum, ADDR),
            Path::new("/reg/blockchains/ethereum/assets").join(ADDR).join("logo.png")
        );
        assert_eq!(
            tree.info_path(Chain::Ethereum, ADDR),
            Path::new("/reg/blockchains/ethereum/assets").join(ADDR).join("info.json")
        );
    }

    #[tokio::test]
    async fn test_list_addresses() {
        let store = MemoryStore::new();
        store.add_dir(format!("/reg/blockchains/ethereum/assets/{ADDR}"));
        let tree = AssetTree::new(store, "/reg");

        let addresses = tree.list_addresses(Chain::Ethereum).await.unwrap();
        assert_eq!(addresses, vec![ADDR]);
    }

    #[tokio::test]
    async fn test_missing_root_reported() {
        let tree = AssetTree::new(MemoryStore::new(), "/reg");
        let err = tree.list_addresses(Chain::Polygon).await.unwrap_err();
        match err {
            StoreError::AssetRootMissing(path) => {
                assert_eq!(path, Path::new("/reg/blockchains/polygon/assets"));
            }
            other => panic!("expected AssetRootMissing, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_list_files_splits_names() {
        let store = MemoryStore::new();
        store.add_file(
            format!("/reg/blockchains/ethereum/assets/{ADDR}/logo.jpg"),
            "img",
        );
        let tree = AssetTree::new(store, "/reg");

        let files = tree.list_files(Chain::Ethereum, ADDR).await.unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "logo");
        assert_eq!(files[0].extension, "jpg");
    }

    #[tokio::test]
    async fn test_has_info() {
        let store = MemoryStore::new();
        store.add_file(
            format!("/reg/blockchains/ethereum/assets/{ADDR}/info.json"),
            "{}",
        );
        let tree = AssetTree::new(store, "/reg");

        assert!(tree.has_info(Chain::Ethereum, ADDR).await);
        assert!(!tree.has_info(Chain::Classic, ADDR).await);
    }
}
