mod logic;
mod models;

pub mod prelude {
    pub use crate::logic::*;
    pub use crate::models::*;

    // Ethereum Crates
    pub use alloy::primitives::{Address, Bytes, ChainId, TxHash, U256};
    pub use alloy::signers::local::PrivateKeySigner;

    // Third Party Crates
    pub use bon::Builder;
    pub use derive_more::{AsRef, From};
    pub use getset::Getters;
    pub use log::{debug, error, info, warn};
    pub use tokio_util::sync::CancellationToken;
    pub use url::Url;
}
