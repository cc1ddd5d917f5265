//! Repair passes for the known-fixable structural defects.
//!
//! Two repairs, both idempotent: renaming wrongly-extensioned logo files
//! to the conventional name, and renaming asset directories to the
//! canonical address casing. Within one asset the logo repair always runs
//! before the directory rename so the rename never operates on a stale
//! path. A failed move is logged and skipped; it never aborts the batch
//! and nothing is rolled back.

use tokenreg_core::{to_checksum, Chain, LOGO_EXTENSION};
use tokenreg_store::{AssetTree, FileStore};

/// Counters for one repair pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeStats {
    /// Logo files renamed to the conventional name.
    pub logos_renamed: usize,
    /// Asset directories renamed to canonical casing.
    pub directories_renamed: usize,
    /// Moves that failed and were skipped.
    pub moves_failed: usize,
}

impl NormalizeStats {
    /// Fold another pass's counters into this one.
    pub fn merge(&mut self, other: NormalizeStats) {
        self.logos_renamed += other.logos_renamed;
        self.directories_renamed += other.directories_renamed;
        self.moves_failed += other.moves_failed;
    }

    /// True when the pass changed nothing and nothing failed.
    pub fn is_noop(&self) -> bool {
        *self == NormalizeStats::default()
    }
}

/// Applies the repairs to one chain's assets.
pub struct Normalizer<'a, S> {
    tree: &'a AssetTree<S>,
}

impl<'a, S: FileStore> Normalizer<'a, S> {
    pub fn new(tree: &'a AssetTree<S>) -> Self {
        Self { tree }
    }

    /// Repair every asset of one chain.
    ///
    /// A chain whose asset root is missing is skipped with a warning; fix
    /// mode never fails the batch over a single chain.
    pub async fn normalize_chain(&self, chain: Chain) -> NormalizeStats {
        let mut stats = NormalizeStats::default();
        let addresses = match self.tree.list_addresses(chain).await {
            Ok(addresses) => addresses,
            Err(e) => {
                tracing::warn!(chain = %chain, error = %e, "skipping chain repair");
                return stats;
            }
        };
        for address in &addresses {
            self.normalize_asset(chain, address, &mut stats).await;
        }
        stats
    }

    /// Repair one asset: internal file naming first, then the directory's
    /// own name.
    pub async fn normalize_asset(&self, chain: Chain, address: &str, stats: &mut NormalizeStats) {
        self.fix_logo_files(chain, address, stats).await;
        self.fix_address_casing(chain, address, stats).await;
    }

    /// Rename every file whose base name is the logo name but whose
    /// extension is not the required one. Other base names are never
    /// touched.
    async fn fix_logo_files(&self, chain: Chain, address: &str, stats: &mut NormalizeStats) {
        let files = match self.tree.list_files(chain, address).await {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!(chain = %chain, address, error = %e, "cannot list asset files");
                return;
            }
        };

        for file in files
            .iter()
            .filter(|f| f.has_logo_name() && f.extension != LOGO_EXTENSION)
        {
            let from = self.tree.asset_path(chain, address).join(file.full_name());
            let to = self.tree.logo_path(chain, address);
            match self.tree.store().rename(&from, &to).await {
                Ok(()) => {
                    tracing::info!(chain = %chain, from = %from.display(), "renamed incorrect asset logo extension");
                    stats.logos_renamed += 1;
                }
                Err(e) => {
                    tracing::warn!(chain = %chain, error = %e, "logo rename failed");
                    stats.moves_failed += 1;
                }
            }
        }
    }

    /// Rename the asset directory to canonical casing when it drifted.
    /// A pre-existing canonical target means two spellings collapse to one
    /// address; the move is refused rather than overwriting it.
    async fn fix_address_casing(&self, chain: Chain, address: &str, stats: &mut NormalizeStats) {
        let canonical = match to_checksum(address, chain) {
            Ok(canonical) => canonical,
            Err(e) => {
                tracing::warn!(chain = %chain, address, error = %e, "address not canonicalizable");
                return;
            }
        };
        if canonical == address {
            return;
        }

        let from = self.tree.asset_path(chain, address);
        let to = self.tree.asset_path(chain, &canonical);
        match self.tree.store().rename(&from, &to).await {
            Ok(()) => {
                tracing::info!(chain = %chain, address, canonical = %canonical, "renamed to checksum format");
                stats.directories_renamed += 1;
            }
            Err(e) => {
                tracing::warn!(chain = %chain, address, error = %e, "checksum rename failed");
                stats.moves_failed += 1;
            }
        }
    }
}
