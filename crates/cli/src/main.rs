mod logic;
mod models;

mod prelude {
    pub use crate::logic::*;
    pub use crate::models::*;

    pub use traffic_generator_core::prelude::*;
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    use clap::Parser as _;
    use prelude::*;

    let cli_args = CliArgs::parse();
    init_logging(cli_args.log_level());
    run(cli_args).await
}
