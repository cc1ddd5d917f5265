//! Structural validation of one chain's asset tree.
//!
//! Check mode is strictly read-only and advisory: violations are collected
//! as values, never thrown, and one address's failures do not block the
//! evaluation of others.

use serde::Serialize;
use std::fmt;

use tokenreg_core::{to_checksum, Chain};
use tokenreg_store::{AssetTree, FileStore};

use crate::descriptor::AssetInfoValidator;

/// One human-readable structural violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation(pub String);

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Evaluates every asset address of a chain against the structural
/// invariants.
pub struct StructureChecker<'a, S, V> {
    tree: &'a AssetTree<S>,
    validator: &'a V,
}

impl<'a, S, V> StructureChecker<'a, S, V>
where
    S: FileStore,
    V: AssetInfoValidator<S>,
{
    /// Check against `tree`, judging descriptors with `validator`.
    pub fn new(tree: &'a AssetTree<S>, validator: &'a V) -> Self {
        Self { tree, validator }
    }

    /// Evaluate every asset of `chain`.
    ///
    /// A missing asset root yields exactly one chain-level violation and
    /// no per-address probes. An empty result is a pass.
    pub async fn check(&self, chain: Chain) -> Vec<Violation> {
        let addresses = match self.tree.list_addresses(chain).await {
            Ok(addresses) => addresses,
            Err(e) => return vec![Violation(e.to_string())],
        };
        tracing::info!(chain = %chain, assets = addresses.len(), "checking folder structure");

        let mut violations = Vec::new();
        for address in &addresses {
            self.check_asset(chain, address, &mut violations).await;
        }
        violations
    }

    /// The four per-address probes, in fixed order.
    async fn check_asset(&self, chain: Chain, address: &str, violations: &mut Vec<Violation>) {
        let asset_path = self.tree.asset_path(chain, address);

        // Re-probed even though enumeration just returned the entry: the
        // tree can be mutated externally between the two reads.
        if !self.tree.exists(&asset_path).await {
            violations.push(Violation(format!(
                "Expect directory at path: {}",
                asset_path.display()
            )));
        }

        match to_checksum(address, chain) {
            Ok(canonical) if canonical != *address => {
                violations.push(Violation(format!(
                    "Expect asset at path {} in checksum: '{canonical}'",
                    asset_path.display()
                )));
            }
            Ok(_) => {}
            Err(e) => violations.push(Violation(e.to_string())),
        }

        let logo_path = self.tree.logo_path(chain, address);
        if !self.tree.exists(&logo_path).await {
            violations.push(Violation(format!(
                "Missing file at path '{}'",
                logo_path.display()
            )));
        }

        let (ok, message) = self
            .validator
            .is_asset_info_ok(self.tree, chain, address)
            .await;
        if !ok {
            violations.push(Violation(message));
        }
    }
}
