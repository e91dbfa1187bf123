use crate::prelude::*;

use std::process::ExitCode;

async fn run_traffic_generator(cli_args: CliArgs) -> Result<(), CliError> {
    let config = Config::try_from(cli_args)?;
    let generator = TrafficGenerator::bootstrap(config).await?;
    generator.run().await.map_err(CliError::CoreError)
}

pub async fn run(cli_args: CliArgs) -> ExitCode {
    match run_traffic_generator(cli_args).await {
        Ok(_) => {
            info!("{} ran successfully", BINARY_NAME);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error running {}: {}", BINARY_NAME, e);
            ExitCode::FAILURE
        }
    }
}
