//! # Tokenreg Testkit
//!
//! Testing utilities for the asset registry tooling.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: published checksum test cases with expected
//!   outputs, pinning the canonical address encoding
//! - **Generators**: proptest strategies for address inputs
//! - **Fixtures**: helpers for building in-memory registry trees
//!
//! ## Golden Vectors
//!
//! ```rust
//! use tokenreg_testkit::vectors::all_vectors;
//! use tokenreg_core::{to_checksum, Chain};
//!
//! for vector in all_vectors() {
//!     let canonical = to_checksum(vector.input, Chain::Ethereum).unwrap();
//!     assert_eq!(canonical, vector.checksummed);
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use tokenreg_testkit::fixtures::RegistryFixture;
//! use tokenreg_core::Chain;
//!
//! let fixture = RegistryFixture::new();
//! fixture.add_asset(
//!     Chain::Ethereum,
//!     "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
//!     &["logo.png"],
//! );
//! let tree = fixture.into_tree();
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{RegistryFixture, SAMPLE_ADDRESSES};
pub use generators::{address_bytes, lowercase_address, randomly_cased_address};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
