//! The Registry orchestrator: runs checks and fixes across every chain.
//!
//! A single logical batch job, internally fanned out with bounded
//! concurrency. Chains operate on disjoint subtrees, so concurrent
//! processing needs no locking; every spawned unit is joined and its
//! outcome aggregated before the pass returns.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use tokenreg_core::Chain;
use tokenreg_store::{AssetTree, FileStore};

use crate::checker::{StructureChecker, Violation};
use crate::descriptor::{format_json_file, AssetInfoValidator};
use crate::error::{RegistryError, Result};
use crate::normalizer::{NormalizeStats, Normalizer};

/// Configuration for the Registry.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Registry root directory (the parent of `blockchains/`).
    pub root: PathBuf,
    /// Maximum chains processed concurrently.
    pub max_concurrency: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            max_concurrency: 4,
        }
    }
}

/// A named, independently runnable check for one chain.
#[derive(Debug, Clone)]
pub struct CheckStep {
    pub chain: Chain,
    pub name: String,
}

/// Result of one chain's check step. An empty violation list is a pass.
#[derive(Debug, Clone)]
pub struct ChainReport {
    pub chain: Chain,
    pub step_name: String,
    pub violations: Vec<Violation>,
}

impl ChainReport {
    /// True when the chain passed every probe.
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Result of one fix pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixReport {
    /// Descriptors rewritten into canonical formatting (or confirmed
    /// canonical).
    pub infos_formatted: usize,
    /// Logo files renamed to the conventional name.
    pub logos_renamed: usize,
    /// Asset directories renamed to canonical casing.
    pub directories_renamed: usize,
    /// Moves that failed and were skipped.
    pub moves_failed: usize,
}

/// The main orchestrator.
///
/// Holds the asset tree and the descriptor predicate behind `Arc`s so
/// per-chain workers can be spawned onto the runtime.
pub struct Registry<S, V> {
    tree: Arc<AssetTree<S>>,
    validator: Arc<V>,
    config: RegistryConfig,
}

impl<S, V> Registry<S, V>
where
    S: FileStore + 'static,
    V: AssetInfoValidator<S> + 'static,
{
    /// Create a registry over `store`, rooted at `config.root`.
    pub fn new(store: S, validator: V, config: RegistryConfig) -> Self {
        let tree = Arc::new(AssetTree::new(store, config.root.clone()));
        Self {
            tree,
            validator: Arc::new(validator),
            config,
        }
    }

    /// The underlying asset tree.
    pub fn tree(&self) -> &AssetTree<S> {
        &self.tree
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Sanity check
    // ─────────────────────────────────────────────────────────────────────────

    /// One named check step per chain in the fork family.
    pub fn check_steps(&self) -> Vec<CheckStep> {
        Chain::ALL
            .iter()
            .map(|&chain| CheckStep {
                chain,
                name: format!("Folder structure for chain {chain}"),
            })
            .collect()
    }

    /// Run a single step. Read-only.
    pub async fn run_step(&self, step: &CheckStep) -> ChainReport {
        let checker = StructureChecker::new(&self.tree, &*self.validator);
        ChainReport {
            chain: step.chain,
            step_name: step.name.clone(),
            violations: checker.check(step.chain).await,
        }
    }

    /// Run every chain's check step with bounded concurrency.
    ///
    /// Violations in one chain never prevent another chain from running;
    /// reports come back in fork-family order for reproducible output.
    pub async fn sanity_check(&self) -> Result<Vec<ChainReport>> {
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrency));
        let mut join_set = JoinSet::new();

        for step in self.check_steps() {
            let tree = Arc::clone(&self.tree);
            let validator = Arc::clone(&self.validator);
            let permit = Arc::clone(&semaphore)
                .acquire_owned()
                .await
                .expect("semaphore never closed");
            join_set.spawn(async move {
                let _permit = permit;
                let checker = StructureChecker::new(&tree, &*validator);
                let violations = checker.check(step.chain).await;
                ChainReport {
                    chain: step.chain,
                    step_name: step.name,
                    violations,
                }
            });
        }

        let mut reports = Vec::new();
        let mut failures = Vec::new();
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok(report) => reports.push(report),
                Err(e) => failures.push(e.to_string()),
            }
        }
        if !failures.is_empty() {
            return Err(RegistryError::TaskJoin(failures.join("; ")));
        }

        reports.sort_by_key(|r| Chain::ALL.iter().position(|c| *c == r.chain));
        Ok(reports)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Sanity fix
    // ─────────────────────────────────────────────────────────────────────────

    /// Run the mutating pass: reformat descriptors, then repair logo
    /// naming and address casing for every chain.
    ///
    /// The two stages are independent; neither resolves descriptor
    /// semantics, so a persistently invalid descriptor stays invalid.
    pub async fn sanity_fix(&self) -> Result<FixReport> {
        let infos_formatted = self.format_infos().await?;
        let stats = self.normalize_all().await?;
        Ok(FixReport {
            infos_formatted,
            logos_renamed: stats.logos_renamed,
            directories_renamed: stats.directories_renamed,
            moves_failed: stats.moves_failed,
        })
    }

    /// Stage (a): rewrite every existing descriptor into canonical
    /// formatting.
    async fn format_infos(&self) -> Result<usize> {
        tracing::info!("formatting info files");
        let counts = self
            .for_each_chain(|tree, chain| async move { format_chain_infos(&tree, chain).await })
            .await?;
        Ok(counts.into_iter().sum())
    }

    /// Stage (b): run the repairs over every enumerated address.
    async fn normalize_all(&self) -> Result<NormalizeStats> {
        tracing::info!("checking for checksum formats");
        let all = self
            .for_each_chain(|tree, chain| async move {
                Normalizer::new(&tree).normalize_chain(chain).await
            })
            .await?;
        let mut stats = NormalizeStats::default();
        for chain_stats in all {
            stats.merge(chain_stats);
        }
        Ok(stats)
    }

    /// Fan a per-chain operation out over the fork family, bounded by the
    /// configured concurrency, joining every worker and aggregating panics
    /// only after all of them ran.
    async fn for_each_chain<F, Fut, T>(&self, op: F) -> Result<Vec<T>>
    where
        F: Fn(Arc<AssetTree<S>>, Chain) -> Fut,
        Fut: std::future::Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrency));
        let mut join_set = JoinSet::new();

        for chain in Chain::ALL {
            let permit = Arc::clone(&semaphore)
                .acquire_owned()
                .await
                .expect("semaphore never closed");
            let fut = op(Arc::clone(&self.tree), chain);
            join_set.spawn(async move {
                let _permit = permit;
                fut.await
            });
        }

        let mut results = Vec::new();
        let mut failures = Vec::new();
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok(result) => results.push(result),
                Err(e) => failures.push(e.to_string()),
            }
        }
        if !failures.is_empty() {
            return Err(RegistryError::TaskJoin(failures.join("; ")));
        }
        Ok(results)
    }
}

/// Reformat every existing descriptor of one chain, returning the count.
async fn format_chain_infos<S: FileStore>(tree: &AssetTree<S>, chain: Chain) -> usize {
    let addresses = match tree.list_addresses(chain).await {
        Ok(addresses) => addresses,
        Err(e) => {
            tracing::warn!(chain = %chain, error = %e, "skipping descriptor formatting");
            return 0;
        }
    };

    let mut count = 0;
    for address in &addresses {
        if !tree.has_info(chain, address).await {
            continue;
        }
        let path = tree.info_path(chain, address);
        match format_json_file(tree.store(), &path).await {
            Ok(()) => count += 1,
            Err(e) => {
                tracing::warn!(chain = %chain, address, error = %e, "descriptor reformat failed");
            }
        }
    }
    tracing::info!(chain = %chain, formatted = count, total = addresses.len(), "formatted info files");
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::BasicInfoValidator;
    use tokenreg_store::MemoryStore;

    const CANONICAL: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

    fn store_with_asset(chain: Chain, address: &str, files: &[(&str, &str)]) -> MemoryStore {
        let store = MemoryStore::new();
        let dir = format!("/reg/blockchains/{chain}/assets/{address}");
        store.add_dir(&dir);
        for (name, contents) in files {
            store.add_file(format!("{dir}/{name}"), *contents);
        }
        store
    }

    fn registry(store: MemoryStore) -> Registry<MemoryStore, BasicInfoValidator> {
        Registry::new(
            store,
            BasicInfoValidator,
            RegistryConfig {
                root: "/reg".into(),
                max_concurrency: 2,
            },
        )
    }

    #[tokio::test]
    async fn test_one_step_per_chain() {
        let registry = registry(MemoryStore::new());
        let steps = registry.check_steps();
        assert_eq!(steps.len(), Chain::ALL.len());
        assert_eq!(steps[0].name, "Folder structure for chain ethereum");
    }

    #[tokio::test]
    async fn test_check_covers_all_chains_independently() {
        // Only ethereum has a root; every other chain must still report.
        let store = store_with_asset(Chain::Ethereum, CANONICAL, &[("logo.png", "x")]);
        let registry = registry(store);

        let reports = registry.sanity_check().await.unwrap();
        assert_eq!(reports.len(), Chain::ALL.len());

        let ethereum = &reports[0];
        assert_eq!(ethereum.chain, Chain::Ethereum);
        assert!(ethereum.is_clean());

        for report in &reports[1..] {
            assert_eq!(report.violations.len(), 1);
            assert!(report.violations[0].0.contains("missing asset root"));
        }
    }

    #[tokio::test]
    async fn test_fix_then_check_converges() {
        let lower = CANONICAL.to_ascii_lowercase();
        let store = store_with_asset(
            Chain::Ethereum,
            &lower,
            &[("logo.jpg", "img"), ("info.json", r#"{"name":"T"}"#)],
        );
        let registry = registry(store);

        let fix = registry.sanity_fix().await.unwrap();
        assert_eq!(fix.infos_formatted, 1);
        assert_eq!(fix.logos_renamed, 1);
        assert_eq!(fix.directories_renamed, 1);
        assert_eq!(fix.moves_failed, 0);

        let reports = registry.sanity_check().await.unwrap();
        assert!(reports[0].is_clean(), "{:?}", reports[0].violations);
    }

    #[tokio::test]
    async fn test_fix_is_idempotent() {
        let lower = CANONICAL.to_ascii_lowercase();
        let store = store_with_asset(Chain::Ethereum, &lower, &[("logo.jpg", "img")]);
        let registry = registry(store);

        registry.sanity_fix().await.unwrap();
        let second = registry.sanity_fix().await.unwrap();

        assert_eq!(second.logos_renamed, 0);
        assert_eq!(second.directories_renamed, 0);
        assert_eq!(second.moves_failed, 0);
    }

    #[tokio::test]
    async fn test_formatting_does_not_resolve_semantics() {
        // A descriptor that is valid JSON but not an object: formatting
        // succeeds, the predicate still rejects it afterwards.
        let store = store_with_asset(
            Chain::Ethereum,
            CANONICAL,
            &[("logo.png", "x"), ("info.json", "[1,2]")],
        );
        let registry = registry(store);

        let fix = registry.sanity_fix().await.unwrap();
        assert_eq!(fix.infos_formatted, 1);

        let reports = registry.sanity_check().await.unwrap();
        assert_eq!(reports[0].violations.len(), 1);
        assert!(reports[0].violations[0].0.contains("JSON object"));
    }

    #[tokio::test]
    async fn test_formatted_descriptor_is_canonical() {
        let store = store_with_asset(
            Chain::Ethereum,
            CANONICAL,
            &[("logo.png", "x"), ("info.json", "{\"b\": 1,\n  \"a\": 2}")],
        );
        let registry = registry(store);
        registry.sanity_fix().await.unwrap();

        let path = registry.tree().info_path(Chain::Ethereum, CANONICAL);
        let formatted = registry.tree().store().read_to_string(&path).await.unwrap();
        let expected: serde_json::Value = serde_json::from_str("{\"b\": 1, \"a\": 2}").unwrap();
        let mut canonical = serde_json::to_string_pretty(&expected).unwrap();
        canonical.push('\n');
        assert_eq!(formatted, canonical);
    }

    #[tokio::test]
    async fn test_run_step_matches_sanity_check() {
        let store = store_with_asset(Chain::Ethereum, CANONICAL, &[]);
        let registry = registry(store);

        let step = registry
            .check_steps()
            .into_iter()
            .find(|s| s.chain == Chain::Ethereum)
            .unwrap();
        let single = registry.run_step(&step).await;
        let all = registry.sanity_check().await.unwrap();

        assert_eq!(single.violations, all[0].violations);
    }
}
