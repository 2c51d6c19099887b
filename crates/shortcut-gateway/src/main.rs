use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use shortcut_gateway::shutdown::shutdown_signal;
use shortcut_gateway::{App, AppState, Config};
use shortcut_storage::Storage;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    shortcut_telemetry::init(&config.log_level, config.log_format)
        .context("failed to initialize telemetry")?;

    let storage_config = config.storage();
    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %storage_config.backend(),
        file_storage_path = ?config.file_storage_path,
        "starting gateway"
    );

    let storage = Arc::new(
        Storage::initialize(&storage_config)
            .await
            .context("failed to initialize storage")?,
    );

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    let router = App::router(AppState::new(storage.clone()));
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    storage.close().await;
    info!("gateway stopped");
    Ok(())
}
