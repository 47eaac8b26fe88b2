use std::process::ExitCode;

use clap::Parser;
use place_hours::{backend::client::BackendClient, cli::Cli, config::Config, watcher::Watcher};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    let client = BackendClient::new(&config.backend_url);
    let watcher = match Watcher::setup(&config, client) {
        Ok(watcher) => watcher,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    if cli.once {
        for report in watcher.snapshot().await {
            match serde_json::to_string(&report) {
                Ok(json) => println!("{}", json),
                Err(err) => error!("Could not serialize report: {}", err),
            }
        }
        return ExitCode::SUCCESS;
    }

    info!("Using backend at {}", config.backend_url);
    watcher.run().await;
    ExitCode::SUCCESS
}
