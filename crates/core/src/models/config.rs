use crate::prelude::*;

use bon::bon;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_REQUEST_INTERVAL: Duration = Duration::from_secs(2);
/// Longest request interval the instance timers accept: one year.
pub const MAX_REQUEST_INTERVAL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Validated startup configuration of the traffic generator.
///
/// Every instance owns exactly one wallet, so the number of signer keys and
/// the number of signer addresses must both equal `num_instances`.
#[derive(Clone, derive_more::Debug, Getters)]
pub struct Config {
    #[getset(get = "pub")]
    node_url: Url,

    #[getset(get = "pub")]
    num_instances: usize,

    #[getset(get = "pub")]
    request_interval: Duration,

    #[debug(skip)]
    #[getset(get = "pub")]
    signer_private_keys: Vec<String>,

    #[getset(get = "pub")]
    signer_addresses: Vec<String>,

    #[getset(get = "pub")]
    timeout: Duration,

    /// Number of random bytes put in the data field of every transaction.
    #[getset(get = "pub")]
    pad_size: usize,
}

#[bon]
impl Config {
    #[builder]
    pub fn new(
        node_url: Url,
        num_instances: usize,
        #[builder(default = DEFAULT_REQUEST_INTERVAL)] request_interval: Duration,
        signer_private_keys: Vec<String>,
        signer_addresses: Vec<String>,
        #[builder(default = DEFAULT_TIMEOUT)] timeout: Duration,
        pad_size: usize,
    ) -> Result<Self, InvalidConfig> {
        if num_instances == 0 {
            return Err(InvalidConfig::NumInstancesMustBePositive);
        }
        if request_interval.is_zero() {
            return Err(InvalidConfig::RequestIntervalMustBePositive);
        }
        if request_interval > MAX_REQUEST_INTERVAL {
            return Err(InvalidConfig::RequestIntervalTooLong {
                request_interval,
                max: MAX_REQUEST_INTERVAL,
            });
        }
        if timeout.is_zero() {
            return Err(InvalidConfig::TimeoutMustBePositive);
        }
        if signer_private_keys.len() != num_instances {
            return Err(InvalidConfig::SignerPrivateKeysCountMismatch {
                expected: num_instances,
                found: signer_private_keys.len(),
            });
        }
        if signer_addresses.len() != num_instances {
            return Err(InvalidConfig::SignerAddressesCountMismatch {
                expected: num_instances,
                found: signer_addresses.len(),
            });
        }
        if !matches!(node_url.scheme(), "http" | "https") {
            return Err(InvalidConfig::UnsupportedNodeUrlScheme {
                scheme: node_url.scheme().to_owned(),
            });
        }

        Ok(Self {
            node_url,
            num_instances,
            request_interval,
            signer_private_keys,
            signer_addresses,
            timeout,
            pad_size,
        })
    }
}
