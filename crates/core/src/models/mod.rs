mod config;
mod error;
mod runner_state;
mod traits;
mod transaction;
mod wallet;
mod wallet_pool;

pub use config::*;
pub use error::*;
pub use runner_state::*;
pub use traits::*;
pub use transaction::*;
pub use wallet::*;
pub use wallet_pool::*;
