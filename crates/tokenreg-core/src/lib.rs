//! # Tokenreg Core
//!
//! Pure primitives for the asset registry tooling: the closed chain set,
//! address checksum canonicalization, and asset directory layout rules.
//!
//! This crate contains no I/O, no filesystem access, no async. It is pure
//! computation over address strings and file names.
//!
//! ## Key Types
//!
//! - [`Chain`] - One member of the fixed fork family sharing the address scheme
//! - [`AssetFile`] - A file name inside an asset directory, split into base and extension
//!
//! ## Canonicalization
//!
//! Every address has exactly one canonical mixed-case rendering per chain.
//! See [`to_checksum`] for the encoding rules.

pub mod address;
pub mod chain;
pub mod error;
pub mod layout;

pub use address::to_checksum;
pub use chain::Chain;
pub use error::{AddressError, UnknownChain};
pub use layout::{AssetFile, INFO_FULL_NAME, LOGO_EXTENSION, LOGO_FULL_NAME, LOGO_NAME};
