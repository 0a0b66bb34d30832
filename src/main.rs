//! Pay period HTTP service.
//!
//! Usage: `pay-period-engine [CONFIG_PATH]`. Without a path the built-in
//! defaults are used. `PAY_PERIOD_LOG` overrides the configured log filter.

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pay_period_engine::api::create_router;
use pay_period_engine::config::ConfigLoader;

const LOG_ENV_VAR: &str = "PAY_PERIOD_LOG";

#[tokio::main]
async fn main() -> ExitCode {
    let loader = match std::env::args().nth(1) {
        Some(path) => match ConfigLoader::load(&path) {
            Ok(loader) => loader,
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => ConfigLoader::default(),
    };
    let config = loader.config();

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let address = config.server.bind_address();
    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(%address, error = %err, "Failed to bind listener");
            return ExitCode::FAILURE;
        }
    };

    info!(%address, "Pay period service listening");
    if let Err(err) = axum::serve(listener, create_router()).await {
        error!(error = %err, "Server stopped");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
