//! # Tokenreg Store
//!
//! The filesystem seam for the asset registry tooling.
//!
//! All disk access goes through the [`FileStore`] capability trait so that
//! checking and repair logic can be exercised against an in-memory fake.
//! Implementations:
//!
//! - [`DiskStore`] - the real backend over `tokio::fs`
//! - [`MemoryStore`] - deterministic in-memory tree, primarily for tests
//!
//! [`AssetTree`] layers the registry's directory conventions on top of a
//! store: per-chain asset roots, per-asset logo and descriptor paths, and
//! address enumeration. The tree itself is read-only; mutation happens only
//! through [`FileStore::rename`].

pub mod disk;
pub mod error;
pub mod memory;
pub mod traits;
pub mod tree;

pub use disk::DiskStore;
pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use traits::FileStore;
pub use tree::{AssetTree, BLOCKCHAINS_DIR};
