use std::sync::Arc;

use crate::prelude::*;

impl TrafficGenerator<RpcChainClient> {
    /// Connects to the node and derives the wallet of every instance.
    ///
    /// Fails on a malformed key or address before any instance starts. The
    /// node itself is not required to be reachable yet, its chain id is only
    /// logged when it can be fetched.
    pub async fn bootstrap(config: Config) -> Result<Self> {
        let client = RpcChainClient::connect(config.node_url().clone(), *config.timeout())?;
        let generator = Self::new(config, Arc::new(client))?;

        info!(
            "number of instances: {}, pad size: {} bytes, request interval: {:?}",
            generator.config().num_instances(),
            generator.config().pad_size(),
            generator.config().request_interval()
        );
        for (index, wallet) in generator.wallets().iter().enumerate() {
            debug!("Instance {index}: wallet {}", wallet.address());
        }

        match generator.client().chain_id().await {
            Ok(chain_id) => info!(
                "Connected to {} with chain id {chain_id}",
                generator.config().node_url()
            ),
            Err(e) => warn!(
                "Could not fetch chain id from {}, instances will retry: {e}",
                generator.config().node_url()
            ),
        }

        Ok(generator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::test_utils::*;
    use std::time::Duration;

    #[tokio::test]
    async fn unreachable_node_does_not_abort_bootstrap() {
        let config = Config::builder()
            .node_url(Url::parse("http://127.0.0.1:1").unwrap())
            .num_instances(2)
            .signer_private_keys(
                TEST_PRIVATE_KEYS[..2]
                    .iter()
                    .map(|k| k.to_string())
                    .collect(),
            )
            .signer_addresses(
                TEST_ADDRESSES[..2]
                    .iter()
                    .map(|a| a.to_string())
                    .collect(),
            )
            .timeout(Duration::from_millis(500))
            .pad_size(10)
            .build()
            .unwrap();

        let generator = TrafficGenerator::bootstrap(config).await.unwrap();

        assert_eq!(generator.wallets().len(), 2);
        assert_eq!(*generator.wallets().get(1).unwrap().address(), address(1));
    }

    #[tokio::test]
    async fn malformed_address_aborts_bootstrap() {
        let config = Config::builder()
            .node_url(Url::parse("http://127.0.0.1:1").unwrap())
            .num_instances(1)
            .signer_private_keys(vec![TEST_PRIVATE_KEYS[0].to_owned()])
            .signer_addresses(vec!["0x1234".to_owned()])
            .pad_size(10)
            .build()
            .unwrap();

        let result = TrafficGenerator::bootstrap(config).await;

        assert!(matches!(
            result,
            Err(Error::WalletPool(WalletPoolError::AddressDecode { index: 0, .. }))
        ));
    }
}
