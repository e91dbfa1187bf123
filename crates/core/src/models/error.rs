use crate::prelude::*;

use std::time::Duration;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid config {0}")]
    InvalidConfig(#[from] InvalidConfig),

    #[error("Bootstrap error {0}")]
    Bootstrap(#[from] BootstrapError),

    #[error("Wallet pool error {0}")]
    WalletPool(#[from] WalletPoolError),

    #[error("Join runner error {0}")]
    JoinRunnerError(#[from] Box<tokio::task::JoinError>),
}

#[derive(Debug, thiserror::Error)]
pub enum InvalidConfig {
    #[error("Number of instances must be positive")]
    NumInstancesMustBePositive,

    #[error("Request interval must be positive")]
    RequestIntervalMustBePositive,

    #[error("Request interval {request_interval:?} is longer than the maximum of {max:?}")]
    RequestIntervalTooLong {
        request_interval: Duration,
        max: Duration,
    },

    #[error("Timeout must be positive")]
    TimeoutMustBePositive,

    #[error("Expected {expected} signer private keys (one per instance), found {found}")]
    SignerPrivateKeysCountMismatch { expected: usize, found: usize },

    #[error("Expected {expected} signer addresses (one per instance), found {found}")]
    SignerAddressesCountMismatch { expected: usize, found: usize },

    #[error("Unsupported node url scheme `{scheme}`, expected http or https")]
    UnsupportedNodeUrlScheme { scheme: String },
}

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Failed to create chain client: {underlying}")]
    CreateChainClientFailure { underlying: String },
}

#[derive(Debug, thiserror::Error)]
pub enum WalletPoolError {
    #[error("Wallet pool cannot be empty")]
    Empty,

    #[error("Got {private_keys} private keys but {addresses} addresses")]
    LengthMismatch {
        private_keys: usize,
        addresses: usize,
    },

    #[error("Cannot decode private key #{index}: {underlying}")]
    KeyDecode { index: usize, underlying: String },

    #[error("Cannot decode address #{index} `{bad_value}`: {underlying}")]
    AddressDecode {
        index: usize,
        bad_value: String,
        underlying: String,
    },
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ChainClientError {
    #[error("RPC call `{method}` failed: {underlying}")]
    RpcCallFailed {
        method: &'static str,
        underlying: String,
    },
}

impl ChainClientError {
    pub fn rpc(method: &'static str, error: impl std::fmt::Display) -> Self {
        Self::RpcCallFailed {
            method,
            underlying: error.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CraftTransactionError {
    #[error("Failed to fetch pending nonce: {0}")]
    NonceFetch(ChainClientError),

    #[error("Failed to fetch chain id: {0}")]
    ChainIdFetch(ChainClientError),

    #[error("Failed to sign transaction: {underlying}")]
    Signing { underlying: String },
}

/// Reasons a single tick of an instance did not complete. None of them stop
/// the instance; the next tick runs as scheduled.
#[derive(Debug, thiserror::Error)]
pub enum TickError {
    #[error("No wallet for instance {index}")]
    UnknownInstance { index: usize },

    #[error("failed to craft a tx: {0}")]
    Craft(#[from] CraftTransactionError),

    #[error("failed to send transaction: {0}")]
    Submission(ChainClientError),

    #[error("sent {tx_hash} but failed to query balance: {underlying}")]
    BalanceQuery {
        tx_hash: TxHash,
        underlying: ChainClientError,
    },
}
