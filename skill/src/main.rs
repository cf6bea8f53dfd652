use anyhow::Result;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use bank_holidays::HolidayClient;

mod config;
mod controller;
mod envelope;
mod server;

use config::Config;
use controller::SkillController;
use server::SkillState;

const DEFAULT_LOG_FILTER: &str = "bank_holidays=info,bank_holidays_skill=info";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .init();

    let config = Config::parse();

    let client = HolidayClient::new(config.endpoint.clone(), config.timeout())?
        .with_max_body_bytes(config.max_body_bytes);
    let app = server::router(SkillState::new(SkillController::new(client), config.application_id.clone()));

    let listener = TcpListener::bind(config.listen).await?;
    info!(listen = %config.listen, endpoint = %config.endpoint, "skill endpoint ready");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "could not listen for ctrl-c");
    }
    info!("shutting down");
}
