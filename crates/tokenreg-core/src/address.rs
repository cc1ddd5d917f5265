//! Address checksum canonicalization.
//!
//! An address is 20 bytes rendered as `0x` plus 40 hex digits. The
//! canonical rendering mixes the case of the hex letters according to the
//! keccak-256 digest of the lowercase body: where the digest nibble at a
//! position is 8 or higher, the letter at that position is upper-cased.
//!
//! The encoding is a pure function of the input: identical input produces
//! identical output across runs, and re-encoding a canonical address is a
//! no-op. Both properties are relied on to detect drift and to name the
//! repaired directory.

use sha3::{Digest, Keccak256};

use crate::chain::Chain;
use crate::error::AddressError;

/// Hex digits in an address body (20 bytes).
const ADDRESS_HEX_LEN: usize = 40;

/// Canonicalize an address for the given chain.
///
/// Accepts any casing of the hex body. Fails with
/// [`AddressError::InvalidAddressFormat`] when the input is not `0x`
/// followed by exactly 40 hex digits.
pub fn to_checksum(address: &str, chain: Chain) -> Result<String, AddressError> {
    let body = address_body(address, chain)?;
    let digest = Keccak256::digest(body.as_bytes());

    let mut out = String::with_capacity(2 + ADDRESS_HEX_LEN);
    out.push_str("0x");
    for (i, c) in body.chars().enumerate() {
        let nibble = if i % 2 == 0 {
            digest[i / 2] >> 4
        } else {
            digest[i / 2] & 0x0f
        };
        if nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    Ok(out)
}

/// Strip the prefix and lower-case the body, validating shape and charset.
fn address_body(address: &str, chain: Chain) -> Result<String, AddressError> {
    let fail = |reason: &str| AddressError::InvalidAddressFormat {
        chain,
        address: address.to_string(),
        reason: reason.to_string(),
    };

    let body = address
        .strip_prefix("0x")
        .ok_or_else(|| fail("missing 0x prefix"))?;
    if body.len() != ADDRESS_HEX_LEN {
        return Err(fail("expected 40 hex digits"));
    }
    if hex::decode(body).is_err() {
        return Err(fail("non-hex characters"));
    }
    Ok(body.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Published test vectors for the mixed-case encoding.
    const VECTORS: [&str; 8] = [
        "0x52908400098527886E0F7030069857D2E4169EE7",
        "0x8617E340B3D01FA5F11F306F4090FD50E238070D",
        "0xde709f2102306220921060314715629080e2fb77",
        "0x27b1fdb04752bbc536007a920d24acb045561c26",
        "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
        "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
        "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
        "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
    ];

    #[test]
    fn test_known_vectors() {
        for vector in VECTORS {
            let lower = vector.to_ascii_lowercase();
            assert_eq!(to_checksum(&lower, Chain::Ethereum).unwrap(), vector);
        }
    }

    #[test]
    fn test_idempotent() {
        for vector in VECTORS {
            let once = to_checksum(vector, Chain::Ethereum).unwrap();
            let twice = to_checksum(&once, Chain::Ethereum).unwrap();
            assert_eq!(once, twice);
            assert_eq!(once, vector);
        }
    }

    #[test]
    fn test_input_casing_irrelevant() {
        let upper = "0x5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED";
        let lower = upper.to_ascii_lowercase();
        assert_eq!(
            to_checksum(upper, Chain::Ethereum).unwrap(),
            to_checksum(&lower, Chain::Ethereum).unwrap(),
        );
    }

    #[test]
    fn test_same_output_across_chains() {
        let addr = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed";
        let expected = to_checksum(addr, Chain::Ethereum).unwrap();
        for chain in Chain::ALL {
            assert_eq!(to_checksum(addr, chain).unwrap(), expected);
        }
    }

    #[test]
    fn test_rejects_missing_prefix() {
        let err = to_checksum("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed", Chain::Ethereum)
            .unwrap_err();
        assert!(matches!(err, AddressError::InvalidAddressFormat { .. }));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(to_checksum("0x5aaeb6", Chain::Classic).is_err());
        assert!(to_checksum(
            "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed00",
            Chain::Classic
        )
        .is_err());
    }

    #[test]
    fn test_rejects_non_hex() {
        let err = to_checksum("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaeg", Chain::Theta)
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("theta"), "chain should appear in diagnostics: {msg}");
        assert!(msg.contains("non-hex characters"));
    }
}
