//! Proptest strategies for address inputs.

use proptest::prelude::*;

/// Raw 20-byte addresses.
pub fn address_bytes() -> impl Strategy<Value = [u8; 20]> {
    any::<[u8; 20]>()
}

/// Lowercase hex rendering with the `0x` prefix.
pub fn lowercase_address() -> impl Strategy<Value = String> {
    address_bytes().prop_map(|bytes| format!("0x{}", hex::encode(bytes)))
}

/// An address whose hex letters carry independently chosen casing.
pub fn randomly_cased_address() -> impl Strategy<Value = String> {
    (address_bytes(), any::<[bool; 40]>()).prop_map(|(bytes, upper)| {
        let body = hex::encode(bytes);
        let mut out = String::with_capacity(42);
        out.push_str("0x");
        for (c, upper) in body.chars().zip(upper) {
            if upper {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
        }
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokenreg_core::{to_checksum, Chain};

    proptest! {
        #[test]
        fn prop_checksum_idempotent(address in lowercase_address()) {
            let once = to_checksum(&address, Chain::Ethereum).unwrap();
            let twice = to_checksum(&once, Chain::Ethereum).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_input_casing_irrelevant(address in randomly_cased_address()) {
            let from_cased = to_checksum(&address, Chain::Ethereum).unwrap();
            let from_lower = to_checksum(&address.to_ascii_lowercase(), Chain::Ethereum).unwrap();
            prop_assert_eq!(from_cased, from_lower);
        }

        #[test]
        fn prop_canonical_form_preserves_value(address in lowercase_address()) {
            let canonical = to_checksum(&address, Chain::Ethereum).unwrap();
            prop_assert_eq!(canonical.to_ascii_lowercase(), address);
        }

        #[test]
        fn prop_all_chains_agree(address in lowercase_address()) {
            let reference = to_checksum(&address, Chain::Ethereum).unwrap();
            for chain in Chain::ALL {
                prop_assert_eq!(&to_checksum(&address, chain).unwrap(), &reference);
            }
        }
    }
}
