//! Test fixtures and helpers.
//!
//! Common setup code for building in-memory registry trees.

use std::path::{Path, PathBuf};

use tokenreg::{BasicInfoValidator, Registry, RegistryConfig};
use tokenreg_core::Chain;
use tokenreg_store::{AssetTree, MemoryStore};

/// Canonical sample addresses for use in tests.
pub const SAMPLE_ADDRESSES: [&str; 4] = [
    "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
    "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
    "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
    "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
];

/// A registry root over an in-memory store, ready to populate.
pub struct RegistryFixture {
    root: PathBuf,
    store: MemoryStore,
}

impl RegistryFixture {
    /// Create an empty fixture rooted at `/registry`.
    pub fn new() -> Self {
        Self {
            root: PathBuf::from("/registry"),
            store: MemoryStore::new(),
        }
    }

    /// The registry root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create a chain's asset root with no assets.
    pub fn add_chain(&self, chain: Chain) {
        self.store.add_dir(self.assets_root(chain));
    }

    /// Create an asset directory holding the given plain files.
    pub fn add_asset(&self, chain: Chain, address: &str, files: &[&str]) {
        let dir = self.assets_root(chain).join(address);
        self.store.add_dir(&dir);
        for file in files {
            self.store.add_file(dir.join(file), "fixture");
        }
    }

    /// Create an asset with files plus an `info.json` descriptor.
    pub fn add_asset_with_info(&self, chain: Chain, address: &str, files: &[&str], info: &str) {
        self.add_asset(chain, address, files);
        let dir = self.assets_root(chain).join(address);
        self.store.add_file(dir.join("info.json"), info);
    }

    /// Finish population and get the asset tree view.
    pub fn into_tree(self) -> AssetTree<MemoryStore> {
        AssetTree::new(self.store, self.root)
    }

    /// Finish population and get a registry with the shipped descriptor
    /// predicate.
    pub fn into_registry(self) -> Registry<MemoryStore, BasicInfoValidator> {
        let config = RegistryConfig {
            root: self.root,
            max_concurrency: 2,
        };
        Registry::new(self.store, BasicInfoValidator, config)
    }

    fn assets_root(&self, chain: Chain) -> PathBuf {
        self.root
            .join("blockchains")
            .join(chain.dir_name())
            .join("assets")
    }
}

impl Default for RegistryFixture {
    fn default() -> Self {
        Self::new()
    }
}
