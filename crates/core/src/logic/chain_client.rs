use crate::prelude::*;

use alloy::network::Ethereum;
use alloy::providers::{Provider, RootProvider};
use alloy::rpc::client::RpcClient;
use alloy::transports::http::{reqwest, Http};
use async_trait::async_trait;
use std::time::Duration;

/// The four node calls the traffic loop needs.
///
/// Implementations must be safe to call concurrently from every instance;
/// failures are returned as-is, without retries.
#[async_trait]
pub trait ChainClient: Send + Sync + 'static {
    /// Nonce of `address` including transactions still in the mempool.
    async fn pending_nonce(&self, address: Address) -> Result<Nonce, ChainClientError>;

    async fn chain_id(&self) -> Result<ChainId, ChainClientError>;

    async fn balance(&self, address: Address) -> Result<U256, ChainClientError>;

    async fn send_transaction(
        &self,
        transaction: &CraftedTransaction,
    ) -> Result<TxHash, ChainClientError>;
}

/// [`ChainClient`] over Ethereum JSON-RPC on a single HTTP connection pool.
#[derive(Clone, derive_more::Debug)]
#[debug("RpcChainClient({})", node_url)]
pub struct RpcChainClient {
    node_url: Url,
    provider: RootProvider<Ethereum>,
}

impl RpcChainClient {
    /// Every request made through the client is aborted after `timeout`.
    pub fn connect(node_url: Url, timeout: Duration) -> Result<Self, BootstrapError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BootstrapError::CreateChainClientFailure {
                underlying: e.to_debug_string(),
            })?;
        let transport = Http::with_client(http_client, node_url.clone());
        let provider = RootProvider::new(RpcClient::new(transport, false));
        debug!("Created chain client for {node_url} with timeout {timeout:?}");
        Ok(Self { node_url, provider })
    }
}

#[async_trait]
impl ChainClient for RpcChainClient {
    async fn pending_nonce(&self, address: Address) -> Result<Nonce, ChainClientError> {
        self.provider
            .get_transaction_count(address)
            .pending()
            .await
            .map_err(|e| ChainClientError::rpc("eth_getTransactionCount", e))
    }

    async fn chain_id(&self) -> Result<ChainId, ChainClientError> {
        self.provider
            .get_chain_id()
            .await
            .map_err(|e| ChainClientError::rpc("eth_chainId", e))
    }

    async fn balance(&self, address: Address) -> Result<U256, ChainClientError> {
        self.provider
            .get_balance(address)
            .await
            .map_err(|e| ChainClientError::rpc("eth_getBalance", e))
    }

    async fn send_transaction(
        &self,
        transaction: &CraftedTransaction,
    ) -> Result<TxHash, ChainClientError> {
        let pending = self
            .provider
            .send_raw_transaction(transaction.encoded())
            .await
            .map_err(|e| ChainClientError::rpc("eth_sendRawTransaction", e))?;
        Ok(*pending.tx_hash())
    }
}
