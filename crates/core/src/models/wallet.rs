use crate::prelude::*;

use k256::ecdsa::VerifyingKey;

/// One wallet slot of the pool: a signing key, its public key and the
/// address declared for it in the configuration.
///
/// The declared address is trusted as-is and is what other instances send
/// funds to. The address derived from the key is what pays for and signs
/// outgoing transactions.
#[derive(Clone, derive_more::Debug, Getters)]
#[debug("KeyPair({})", address)]
pub struct KeyPair {
    #[getset(get = "pub")]
    signer: PrivateKeySigner,

    #[getset(get = "pub")]
    public_key: VerifyingKey,

    #[getset(get = "pub")]
    address: Address,
}

impl KeyPair {
    pub fn new(signer: PrivateKeySigner, address: Address) -> Self {
        let public_key = *signer.credential().verifying_key();
        Self {
            signer,
            public_key,
            address,
        }
    }

    pub fn signer_address(&self) -> Address {
        self.signer.address()
    }
}

impl PartialEq for KeyPair {
    fn eq(&self, other: &Self) -> bool {
        self.public_key == other.public_key && self.address == other.address
    }
}
impl Eq for KeyPair {}
