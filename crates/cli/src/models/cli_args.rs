use crate::prelude::*;
use clap::Parser;
use std::time::Duration;

pub const BINARY_NAME: &str = "da-traffic-generator";

/// Sends a steady stream of padded, signed value transfers to an Ethereum
/// JSON-RPC node.
///
/// Every instance owns one wallet and, once per request interval, transfers a
/// small amount to the wallet of the next instance with `data-size` random
/// bytes attached, then logs its own balance. Runs until SIGINT or SIGTERM.
#[derive(Parser, Debug)]
#[command(name = BINARY_NAME, author, version, about, long_about = None)]
pub struct CliArgs {
    /// JSON-RPC endpoint of the node, e.g. `http://localhost:8545`.
    #[arg(
        long = "traffic-generator.disperser-hostname",
        env = "TRAFFIC_GENERATOR_HOSTNAME"
    )]
    node_url: String,

    /// Timeout of every request made to the node.
    #[arg(
        long = "traffic-generator.timeout",
        env = "TRAFFIC_GENERATOR_TIMEOUT",
        default_value = "10s",
        value_parser = humantime::parse_duration
    )]
    timeout: Duration,

    /// Number of instances sending in parallel.
    #[arg(
        long = "traffic-generator.num-instances",
        env = "TRAFFIC_GENERATOR_NUM_INSTANCES"
    )]
    num_instances: usize,

    /// Size in bytes of the random payload of every transaction.
    #[arg(
        long = "traffic-generator.data-size",
        env = "TRAFFIC_GENERATOR_PAD_SIZE"
    )]
    data_size: usize,

    /// Time between two transactions of the same instance.
    #[arg(
        long = "traffic-generator.request-interval",
        env = "TRAFFIC_GENERATOR_REQUEST_INTERVAL",
        default_value = "2s",
        value_parser = humantime::parse_duration
    )]
    request_interval: Duration,

    /// Hex encoded private keys, one per instance.
    #[arg(
        long = "traffic-generator.signer-private-keys-hex",
        env = "TRAFFIC_GENERATOR_SIGNER_PRIVATE_KEYS_HEX",
        value_delimiter = ',',
        required = true,
        hide_env_values = true
    )]
    signer_private_keys: Vec<String>,

    /// Hex encoded addresses, one per instance, in the same order as the keys.
    #[arg(
        long = "traffic-generator.signer-addresses-hex",
        env = "TRAFFIC_GENERATOR_SIGNER_ADDRESSES",
        value_delimiter = ',',
        required = true
    )]
    signer_addresses: Vec<String>,

    /// Overrides the level set with `RUST_LOG`.
    #[arg(
        long = "traffic-generator.log-level",
        env = "TRAFFIC_GENERATOR_LOG_LEVEL"
    )]
    log_level: Option<String>,
}

impl CliArgs {
    pub fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }
}

impl TryFrom<CliArgs> for Config {
    type Error = InvalidCliArgs;

    fn try_from(cli_args: CliArgs) -> Result<Self, Self::Error> {
        let Ok(url) = Url::parse(&cli_args.node_url) else {
            return Err(InvalidCliArgs::NodeUrlInvalid {
                bad_value: cli_args.node_url.clone(),
            });
        };

        Config::builder()
            .node_url(url)
            .num_instances(cli_args.num_instances)
            .request_interval(cli_args.request_interval)
            .signer_private_keys(cli_args.signer_private_keys)
            .signer_addresses(cli_args.signer_addresses)
            .timeout(cli_args.timeout)
            .pad_size(cli_args.data_size)
            .build()
            .map_err(InvalidCliArgs::from)
    }
}
