use crate::prelude::*;

use alloy::consensus::{Signed, TxEnvelope, TxLegacy};
use alloy::eips::eip2718::Encodable2718;

pub type Nonce = u64;

/// Value transferred by every generated transaction, in wei.
pub const TRANSFER_VALUE_WEI: u64 = 1_000;
/// Gas limit of every generated transaction.
pub const GAS_LIMIT: u64 = 3_000_000;
/// Gas price of every generated transaction, in wei (30 gwei).
pub const GAS_PRICE_WEI: u128 = 30_000_000_000;

/// A signed legacy (EIP-155) transfer, ready to be submitted.
///
/// `from` is the address derived from the signing key, which is the account
/// the node will charge and whose nonce the transaction consumes.
#[derive(Debug, Clone, Getters, derive_more::Display)]
#[display(
    "Transfer {{ from: {from}, nonce: {}, payload: {} bytes, encoded: {} bytes }}",
    signed.tx().nonce,
    signed.tx().input.len(),
    encoded.len()
)]
pub struct CraftedTransaction {
    #[getset(get = "pub")]
    from: Address,

    #[getset(get = "pub")]
    signed: Signed<TxLegacy>,

    /// EIP-2718 encoding, which for legacy transactions is the plain RLP
    /// encoding expected by `eth_sendRawTransaction`.
    #[getset(get = "pub")]
    encoded: Bytes,
}

impl CraftedTransaction {
    pub fn new(from: Address, signed: Signed<TxLegacy>) -> Self {
        let encoded = TxEnvelope::Legacy(signed.clone()).encoded_2718().into();
        Self {
            from,
            signed,
            encoded,
        }
    }

    pub fn hash(&self) -> TxHash {
        *self.signed.hash()
    }

    pub fn nonce(&self) -> Nonce {
        self.signed.tx().nonce
    }

    pub fn to(&self) -> Option<Address> {
        self.signed.tx().to.to().copied()
    }

    pub fn chain_id(&self) -> Option<ChainId> {
        self.signed.tx().chain_id
    }

    pub fn payload(&self) -> &Bytes {
        &self.signed.tx().input
    }
}
