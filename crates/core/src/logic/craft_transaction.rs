use crate::prelude::*;

use alloy::consensus::{SignableTransaction, Signed, TxLegacy};
use alloy::primitives::TxKind;
use alloy::signers::SignerSync;
use rand::RngCore;

/// `pad_size` bytes from the thread-local CSPRNG.
pub fn random_payload(pad_size: usize) -> Bytes {
    let mut payload = vec![0u8; pad_size];
    rand::rng().fill_bytes(&mut payload);
    payload.into()
}

fn sign(
    signer: &PrivateKeySigner,
    transaction: TxLegacy,
) -> Result<Signed<TxLegacy>, CraftTransactionError> {
    let signature = signer
        .sign_hash_sync(&transaction.signature_hash())
        .map_err(|e| CraftTransactionError::Signing {
            underlying: e.to_debug_string(),
        })?;
    Ok(transaction.into_signed(signature))
}

/// Builds and signs a transfer from `sender` to `receiver` carrying
/// `pad_size` random bytes, without submitting it.
///
/// The nonce is the sender's pending nonce and the signature is bound to the
/// chain id reported by the node at call time.
pub async fn craft_transaction<C>(
    client: &C,
    sender: &KeyPair,
    receiver: Address,
    pad_size: usize,
) -> Result<CraftedTransaction, CraftTransactionError>
where
    C: ChainClient + ?Sized,
{
    let from = sender.signer_address();
    let nonce = client
        .pending_nonce(from)
        .await
        .map_err(CraftTransactionError::NonceFetch)?;

    let input = random_payload(pad_size);

    let chain_id = client
        .chain_id()
        .await
        .map_err(CraftTransactionError::ChainIdFetch)?;

    let transaction = TxLegacy {
        chain_id: Some(chain_id),
        nonce,
        gas_price: GAS_PRICE_WEI,
        gas_limit: GAS_LIMIT,
        to: TxKind::Call(receiver),
        value: U256::from(TRANSFER_VALUE_WEI),
        input,
    };

    let crafted = CraftedTransaction::new(from, sign(sender.signer(), transaction)?);
    info!(
        "signed transaction length after RLP encoding: {}",
        crafted.encoded().len()
    );
    Ok(crafted)
}
