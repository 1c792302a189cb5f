mod cli;

use crate::cli::CLI;
use cinelink_gateway::{App, AppState};
use cinelink_redirect::RedirectStore;
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();

    cinelink_telemetry::init(config.log_format.into())?;

    info!(
        listen_addr = %config.listen_addr,
        public_base_url = ?config.public_base_url,
        watch_base_url = ?config.watch_base_url,
        redirect_ttl = ?config.redirect_ttl,
        token_bytes = config.token_bytes,
        log_format = %config.log_format,
        "starting cinelink gateway"
    );

    let store = RedirectStore::new(config.store_settings())?;
    let state = AppState::new(Arc::new(store), config.presenter_settings());

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
