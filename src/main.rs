//! Flash-loan arbitrage deployer - Main Entry Point
//!
//! Deploys the mock tokens, the funded mock pool and the FlashloanArb bot,
//! then prints their addresses.

use flashloan_arb_deployer::*;
use std::process::ExitCode;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let config = CONFIG.clone();

    // Logging is set up before anything can fail so the failure gets logged
    let _logging_guard = match utils::setup_output_directories(&config.output_dir)
        .and_then(|_| utils::setup_logging(&config.logs_dir()))
    {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Deployment failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &Config) -> anyhow::Result<()> {
    let record = deploy::run_deployment(config).await?;

    utils::print_deployment_summary(&record, config.token_decimals);

    if config.save_deployment {
        let path = storage::save_deployment(&record, &config.deployments_dir())?;
        info!("Deployment record written to {}", path.display());
    } else {
        warn!("SAVE_DEPLOYMENT=false, deployment record not written");
    }

    Ok(())
}
