use crate::prelude::*;

use std::str::FromStr;

fn decode_private_key(
    index: usize,
    private_key_hex: &str,
) -> Result<PrivateKeySigner, WalletPoolError> {
    let private_key_hex = private_key_hex.trim();
    let private_key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);
    let bytes = hex::decode(private_key_hex).map_err(|e| WalletPoolError::KeyDecode {
        index,
        underlying: e.to_debug_string(),
    })?;
    PrivateKeySigner::from_slice(&bytes).map_err(|e| WalletPoolError::KeyDecode {
        index,
        underlying: e.to_debug_string(),
    })
}

fn decode_address(index: usize, address_hex: &str) -> Result<Address, WalletPoolError> {
    Address::from_str(address_hex.trim()).map_err(|e| WalletPoolError::AddressDecode {
        index,
        bad_value: address_hex.to_owned(),
        underlying: e.to_debug_string(),
    })
}

impl WalletPool {
    /// Decodes the positionally paired `private_keys` and `addresses` into a
    /// pool of wallets, where wallet `i` belongs to instance `i`.
    pub fn derive(
        private_keys: &[impl AsRef<str>],
        addresses: &[impl AsRef<str>],
    ) -> Result<Self, WalletPoolError> {
        if private_keys.len() != addresses.len() {
            return Err(WalletPoolError::LengthMismatch {
                private_keys: private_keys.len(),
                addresses: addresses.len(),
            });
        }

        let key_pairs = private_keys
            .iter()
            .zip(addresses)
            .enumerate()
            .map(|(index, (private_key, address))| {
                let signer = decode_private_key(index, private_key.as_ref())?;
                let address = decode_address(index, address.as_ref())?;
                if signer.address() != address {
                    warn!(
                        "Wallet #{index}: declared address {address} differs from key address {}",
                        signer.address()
                    );
                }
                Ok(KeyPair::new(signer, address))
            })
            .collect::<Result<Vec<_>, WalletPoolError>>()?;

        debug!("Derived {} wallets", key_pairs.len());
        Self::new(key_pairs)
    }
}
