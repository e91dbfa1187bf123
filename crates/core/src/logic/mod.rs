mod chain_client;
mod craft_transaction;
mod derive_wallets;
mod instance_runner;
mod shutdown_signal;
mod traffic_generator;

#[cfg(test)]
mod test_utils;

pub use chain_client::*;
pub use craft_transaction::*;
pub use instance_runner::*;
pub use shutdown_signal::*;
pub use traffic_generator::*;
