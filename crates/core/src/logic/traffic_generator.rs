mod traffic_generator_bootstrap;
mod traffic_generator_run;

pub use traffic_generator_run::*;

use crate::prelude::*;

use std::sync::Arc;

/// Owns the wallet pool and the chain client shared by every instance.
#[derive(Debug, Getters)]
pub struct TrafficGenerator<C = RpcChainClient> {
    #[getset(get = "pub")]
    config: Config,

    #[getset(get = "pub")]
    wallets: Arc<WalletPool>,

    #[getset(get = "pub")]
    client: Arc<C>,
}

impl<C: ChainClient> TrafficGenerator<C> {
    pub fn new(config: Config, client: Arc<C>) -> Result<Self> {
        let wallets = WalletPool::derive(
            config.signer_private_keys(),
            config.signer_addresses(),
        )?;
        Ok(Self {
            config,
            wallets: Arc::new(wallets),
            client,
        })
    }

    /// One runner per configured instance, each owning the wallet at its index.
    pub fn runners(&self) -> Vec<InstanceRunner<C>> {
        (0..*self.config.num_instances())
            .map(|index| {
                InstanceRunner::new(
                    index,
                    self.wallets.clone(),
                    self.client.clone(),
                    *self.config.request_interval(),
                    *self.config.pad_size(),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::test_utils::*;
    use std::time::Duration;

    #[test]
    fn one_runner_per_instance() {
        for n in 1..=3 {
            let generator = TrafficGenerator::new(
                test_config(n, 10, Duration::from_secs(1)),
                Arc::new(MockChainClient::default()),
            )
            .unwrap();

            let runners = generator.runners();
            assert_eq!(runners.len(), n);
            assert_eq!(
                runners.iter().map(|r| r.index()).collect::<Vec<_>>(),
                (0..n).collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn malformed_key_aborts_construction() {
        let config = Config::builder()
            .node_url(Url::parse("http://localhost:8545").unwrap())
            .num_instances(1)
            .signer_private_keys(vec!["0xzz".to_owned()])
            .signer_addresses(vec![TEST_ADDRESSES[0].to_owned()])
            .pad_size(10)
            .build()
            .unwrap();

        let result = TrafficGenerator::new(config, Arc::new(MockChainClient::default()));

        assert!(matches!(
            result,
            Err(Error::WalletPool(WalletPoolError::KeyDecode { index: 0, .. }))
        ));
    }
}
