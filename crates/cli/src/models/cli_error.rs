use crate::prelude::*;

#[derive(Debug, thiserror::Error)]
pub enum InvalidCliArgs {
    #[error("Node url invalid {bad_value}")]
    NodeUrlInvalid { bad_value: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] InvalidConfig),
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid CLI arguments: {0}")]
    InvalidCliArgs(#[from] InvalidCliArgs),

    #[error("Core error: {0}")]
    CoreError(#[from] Error),
}
