//! The closed set of chains sharing the Ethereum address scheme.
//!
//! The registry is organized as one directory tree per chain. Only the
//! chains listed here are walked; representing them as an enum keeps the
//! set closed and lets the compiler enforce exhaustive handling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownChain;

/// One member of the fork family.
///
/// All members share the same 20-byte address format and the same
/// mixed-case checksum rendering, so a single canonicalizer covers
/// the whole set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Ethereum,
    Classic,
    Poa,
    TomoChain,
    GoChain,
    Wanchain,
    ThunderToken,
    Theta,
    SmartChain,
    Polygon,
}

impl Chain {
    /// Every chain in the fork family, in registry order.
    pub const ALL: [Chain; 10] = [
        Chain::Ethereum,
        Chain::Classic,
        Chain::Poa,
        Chain::TomoChain,
        Chain::GoChain,
        Chain::Wanchain,
        Chain::ThunderToken,
        Chain::Theta,
        Chain::SmartChain,
        Chain::Polygon,
    ];

    /// The directory segment used for this chain on disk.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Chain::Ethereum => "ethereum",
            Chain::Classic => "classic",
            Chain::Poa => "poa",
            Chain::TomoChain => "tomochain",
            Chain::GoChain => "gochain",
            Chain::Wanchain => "wanchain",
            Chain::ThunderToken => "thundertoken",
            Chain::Theta => "theta",
            Chain::SmartChain => "smartchain",
            Chain::Polygon => "polygon",
        }
    }

    /// Look a chain up by its directory segment.
    pub fn from_dir_name(name: &str) -> Option<Chain> {
        Chain::ALL.into_iter().find(|c| c.dir_name() == name)
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for Chain {
    type Err = UnknownChain;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chain::from_dir_name(s).ok_or_else(|| UnknownChain(s.to_string()))
    }
}
