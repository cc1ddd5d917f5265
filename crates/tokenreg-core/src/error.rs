//! Error types for the core primitives.

use thiserror::Error;

use crate::chain::Chain;

/// An address string that cannot be parsed into canonical form.
///
/// Callers report this as a violation rather than aborting a pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("invalid address format for chain {chain}: '{address}' ({reason})")]
    InvalidAddressFormat {
        chain: Chain,
        address: String,
        reason: String,
    },
}

/// A chain name that is not part of the fork family.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown chain: {0}")]
pub struct UnknownChain(pub String);
