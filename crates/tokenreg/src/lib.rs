//! # Tokenreg
//!
//! The unified API for validating and repairing the on-disk asset
//! registry of the Ethereum fork family.
//!
//! ## Overview
//!
//! The registry keeps one directory per asset address under each chain's
//! asset root. This crate provides:
//!
//! - **StructureChecker**: read-only validation producing per-chain
//!   violation reports
//! - **Normalizer**: idempotent repair of logo file naming and address
//!   casing
//! - **Registry**: the orchestrator running checks and fixes across every
//!   chain with bounded concurrency
//! - **Descriptor seams**: the opaque `info.json` validity predicate and
//!   the idempotent JSON reformatter
//!
//! ## Key Concepts
//!
//! - **Canonical form**: the single correct casing of an address for a
//!   chain; the on-disk directory name must equal it.
//! - **Sanity check**: read-only pass; an empty violation list is a pass.
//! - **Sanity fix**: mutating pass repairing the known-fixable defects;
//!   every repair is independently idempotent and safe to re-run.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tokenreg::{BasicInfoValidator, Registry, RegistryConfig};
//! use tokenreg::store::DiskStore;
//!
//! async fn example() {
//!     let config = RegistryConfig {
//!         root: "registry".into(),
//!         ..RegistryConfig::default()
//!     };
//!     let registry = Registry::new(DiskStore::new(), BasicInfoValidator, config);
//!
//!     let reports = registry.sanity_check().await.unwrap();
//!     for report in &reports {
//!         for violation in &report.violations {
//!             eprintln!("{}: {}", report.chain, violation);
//!         }
//!     }
//! }
//! ```

pub mod checker;
pub mod descriptor;
pub mod error;
pub mod normalizer;
pub mod registry;

// Re-export component crates
pub use tokenreg_core as core;
pub use tokenreg_store as store;

// Re-export main types for convenience
pub use checker::{StructureChecker, Violation};
pub use descriptor::{format_json_file, AssetInfoValidator, BasicInfoValidator, InfoVerdict};
pub use error::{RegistryError, Result};
pub use normalizer::{NormalizeStats, Normalizer};
pub use registry::{ChainReport, CheckStep, FixReport, Registry, RegistryConfig};

// Re-export commonly used lower-layer types
pub use tokenreg_core::{to_checksum, AddressError, AssetFile, Chain};
pub use tokenreg_store::{AssetTree, DiskStore, FileStore, MemoryStore, StoreError};
