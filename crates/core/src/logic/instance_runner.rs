use crate::prelude::*;

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// What a successful tick did.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct TickReport {
    #[getset(get = "pub")]
    tx_hash: TxHash,

    #[getset(get = "pub")]
    nonce: Nonce,

    #[getset(get = "pub")]
    receiver: Address,

    #[getset(get = "pub")]
    balance: U256,
}

/// One traffic generating instance: every `request_interval` it sends one
/// transfer from its own wallet to the wallet of the next instance.
#[derive(Debug)]
pub struct InstanceRunner<C> {
    index: usize,
    wallets: Arc<WalletPool>,
    client: Arc<C>,
    request_interval: Duration,
    pad_size: usize,
    state: watch::Sender<RunnerState>,
}

impl<C: ChainClient> InstanceRunner<C> {
    pub fn new(
        index: usize,
        wallets: Arc<WalletPool>,
        client: Arc<C>,
        request_interval: Duration,
        pad_size: usize,
    ) -> Self {
        let (state, _) = watch::channel(RunnerState::Idle);
        Self {
            index,
            wallets,
            client,
            request_interval,
            pad_size,
            state,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn subscribe(&self) -> watch::Receiver<RunnerState> {
        self.state.subscribe()
    }

    /// Ticks until `cancellation` fires. Cancellation is only observed
    /// between ticks, a tick that already started always runs to completion.
    pub async fn run(self, cancellation: CancellationToken) {
        let mut ticker = interval_at(
            Instant::now() + self.request_interval,
            self.request_interval,
        );
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        debug!(
            "Instance {}: sending every {:?}",
            self.index, self.request_interval
        );

        loop {
            self.state.send_replace(RunnerState::Waiting);
            tokio::select! {
                biased;
                _ = cancellation.cancelled() => break,
                _ = ticker.tick() => {
                    self.state.send_replace(RunnerState::Sending);
                    match self.tick().await {
                        Ok(report) => debug!(
                            "Instance {}: sent {} with nonce {} to {}",
                            self.index,
                            report.tx_hash(),
                            report.nonce(),
                            report.receiver()
                        ),
                        Err(e) => warn!("Instance {}: {}", self.index, e),
                    }
                }
            }
        }

        self.state.send_replace(RunnerState::Stopped);
        info!("Instance {}: stopped", self.index);
    }

    /// Crafts, submits and checks the sender balance once.
    pub async fn tick(&self) -> Result<TickReport, TickError> {
        let (sender, receiver) = self
            .wallets
            .pair_for(self.index)
            .ok_or(TickError::UnknownInstance { index: self.index })?;

        let transaction = craft_transaction(
            self.client.as_ref(),
            sender,
            *receiver.address(),
            self.pad_size,
        )
        .await?;

        let tx_hash = self
            .client
            .send_transaction(&transaction)
            .await
            .map_err(TickError::Submission)?;

        let balance = self
            .client
            .balance(*sender.address())
            .await
            .map_err(|underlying| TickError::BalanceQuery {
                tx_hash,
                underlying,
            })?;
        info!("{} balance {}", sender.address(), balance);

        Ok(TickReport {
            tx_hash,
            nonce: transaction.nonce(),
            receiver: *receiver.address(),
            balance,
        })
    }
}
