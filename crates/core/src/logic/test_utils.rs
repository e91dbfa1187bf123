use crate::prelude::*;

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Well known development accounts (anvil / hardhat mnemonic).
pub(crate) const TEST_PRIVATE_KEYS: [&str; 3] = [
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
    "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d",
    "0x5de4111afa1a4b94908f83103eb1f1706367c2e68ca870fc3fb9a804cdab365a",
];
pub(crate) const TEST_ADDRESSES: [&str; 3] = [
    "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
    "0x70997970C51812dc3A010C7d01b50e0d17dc79C8",
    "0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC",
];
pub(crate) const TEST_CHAIN_ID: ChainId = 31337;

pub(crate) fn test_config(
    num_instances: usize,
    pad_size: usize,
    request_interval: Duration,
) -> Config {
    Config::builder()
        .node_url(Url::parse("http://localhost:8545").unwrap())
        .num_instances(num_instances)
        .request_interval(request_interval)
        .signer_private_keys(
            TEST_PRIVATE_KEYS[..num_instances]
                .iter()
                .map(|k| k.to_string())
                .collect(),
        )
        .signer_addresses(
            TEST_ADDRESSES[..num_instances]
                .iter()
                .map(|a| a.to_string())
                .collect(),
        )
        .pad_size(pad_size)
        .build()
        .unwrap()
}

pub(crate) fn test_wallets(num_instances: usize) -> WalletPool {
    WalletPool::derive(
        &TEST_PRIVATE_KEYS[..num_instances],
        &TEST_ADDRESSES[..num_instances],
    )
    .unwrap()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Submission {
    pub from: Address,
    pub to: Option<Address>,
    pub nonce: Nonce,
    pub payload: Bytes,
}

/// In-memory node: tracks pending nonces per sender, records submitted
/// transactions and fails selected calls on demand.
#[derive(Debug, Default)]
pub(crate) struct MockChainClient {
    pending_nonces: Mutex<HashMap<Address, Nonce>>,
    submissions: Mutex<Vec<Submission>>,
    nonce_failures_left: AtomicUsize,
    fail_chain_id: AtomicBool,
    fail_submissions: AtomicBool,
    fail_balance: AtomicBool,
    balance_queries: AtomicUsize,
    send_delay: Duration,
}

impl MockChainClient {
    pub(crate) fn failing_nonce_calls(self, count: usize) -> Self {
        self.nonce_failures_left.store(count, Ordering::SeqCst);
        self
    }

    pub(crate) fn failing_chain_id(self) -> Self {
        self.fail_chain_id.store(true, Ordering::SeqCst);
        self
    }

    pub(crate) fn failing_submissions(self) -> Self {
        self.fail_submissions.store(true, Ordering::SeqCst);
        self
    }

    /// Every submission takes `delay` before it reaches the node.
    pub(crate) fn delaying_submissions(mut self, delay: Duration) -> Self {
        self.send_delay = delay;
        self
    }

    pub(crate) fn failing_balance(self) -> Self {
        self.fail_balance.store(true, Ordering::SeqCst);
        self
    }

    pub(crate) fn submissions(&self) -> Vec<Submission> {
        self.submissions.lock().unwrap().clone()
    }

    pub(crate) fn submissions_from(&self, from: Address) -> Vec<Submission> {
        self.submissions()
            .into_iter()
            .filter(|s| s.from == from)
            .collect()
    }

    pub(crate) fn balance_queries(&self) -> usize {
        self.balance_queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChainClient for MockChainClient {
    async fn pending_nonce(&self, address: Address) -> Result<Nonce, ChainClientError> {
        let should_fail = self
            .nonce_failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| {
                left.checked_sub(1)
            })
            .is_ok();
        if should_fail {
            return Err(ChainClientError::rpc(
                "eth_getTransactionCount",
                "malformed nonce response",
            ));
        }
        let nonces = self.pending_nonces.lock().unwrap();
        Ok(nonces.get(&address).copied().unwrap_or_default())
    }

    async fn chain_id(&self) -> Result<ChainId, ChainClientError> {
        if self.fail_chain_id.load(Ordering::SeqCst) {
            return Err(ChainClientError::rpc("eth_chainId", "connection refused"));
        }
        Ok(TEST_CHAIN_ID)
    }

    async fn balance(&self, _address: Address) -> Result<U256, ChainClientError> {
        self.balance_queries.fetch_add(1, Ordering::SeqCst);
        if self.fail_balance.load(Ordering::SeqCst) {
            return Err(ChainClientError::rpc("eth_getBalance", "connection reset"));
        }
        Ok(U256::from(1_000_000_000_000_000_000u128))
    }

    async fn send_transaction(
        &self,
        transaction: &CraftedTransaction,
    ) -> Result<TxHash, ChainClientError> {
        if !self.send_delay.is_zero() {
            tokio::time::sleep(self.send_delay).await;
        }
        if self.fail_submissions.load(Ordering::SeqCst) {
            return Err(ChainClientError::rpc(
                "eth_sendRawTransaction",
                "insufficient funds for gas * price + value",
            ));
        }
        *self
            .pending_nonces
            .lock()
            .unwrap()
            .entry(*transaction.from())
            .or_default() += 1;
        self.submissions.lock().unwrap().push(Submission {
            from: *transaction.from(),
            to: transaction.to(),
            nonce: transaction.nonce(),
            payload: transaction.payload().clone(),
        });
        Ok(transaction.hash())
    }
}

pub(crate) fn address(index: usize) -> Address {
    TEST_ADDRESSES[index].parse().unwrap()
}
