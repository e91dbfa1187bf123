/// Lifecycle of a single instance runner.
///
/// `Idle` until spawned, then alternating between `Waiting` (for the next
/// timer tick) and `Sending` (crafting, submitting and checking the balance).
/// `Stopped` is terminal and only reached through cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum RunnerState {
    #[default]
    Idle,
    Waiting,
    Sending,
    Stopped,
}
