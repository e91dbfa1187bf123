use crate::prelude::*;

use futures::future::join_all;
use std::future::Future;
use tokio::{sync::watch, task};

/// A spawned instance runner.
#[derive(Debug)]
pub struct RunnerHandle {
    index: usize,
    state: watch::Receiver<RunnerState>,
    task: task::JoinHandle<()>,
}

impl RunnerHandle {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn state(&self) -> RunnerState {
        *self.state.borrow()
    }
}

impl<C: ChainClient> TrafficGenerator<C> {
    /// Runs every instance until SIGINT or SIGTERM.
    pub async fn run(&self) -> Result<()> {
        self.run_until(shutdown_signal()).await
    }

    /// Runs every instance until `shutdown` resolves, then cancels them all
    /// and waits for each one to stop.
    pub async fn run_until(&self, shutdown: impl Future<Output = ()>) -> Result<()> {
        let cancellation = CancellationToken::new();
        let handles = self.spawn_runners(&cancellation);
        info!("Started {} traffic generator instances", handles.len());

        shutdown.await;

        info!("Stopping {} traffic generator instances", handles.len());
        cancellation.cancel();
        Self::join_runners(handles).await
    }

    pub fn spawn_runners(&self, cancellation: &CancellationToken) -> Vec<RunnerHandle> {
        self.runners()
            .into_iter()
            .map(|runner| RunnerHandle {
                index: runner.index(),
                state: runner.subscribe(),
                task: task::spawn(runner.run(cancellation.clone())),
            })
            .collect()
    }

    /// Waits for all runners, even if one of them panicked.
    pub async fn join_runners(handles: Vec<RunnerHandle>) -> Result<()> {
        join_all(handles.into_iter().map(|handle| handle.task))
            .await
            .into_iter()
            .try_for_each(|result| {
                result.map_err(|e| Error::JoinRunnerError(Box::new(e)))
            })
    }
}
