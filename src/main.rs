mod analysis;
mod config;
mod error;
mod logging;
mod sidecar;
mod web;

use std::sync::Arc;
use anyhow::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    info!("Loading configuration...");
    let config = config::AppConfig::load()?;

    // Sidecar client
    let sidecar = Arc::new(sidecar::DaprClient::new(&config.sidecar));
    info!("Using sidecar at {}", config.sidecar.base_url());

    let processor = analysis::TweetProcessor::new(sidecar, config.pipeline);
    let router = web::create_router(web::state::AppState::new(processor));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting web server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                let ctrl_c_failed = tokio::select! {
                    result = tokio::signal::ctrl_c() => !signal_received(result),
                    _ = terminate.recv() => false,
                };
                if ctrl_c_failed {
                    terminate.recv().await;
                }
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                wait_for_ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    wait_for_ctrl_c().await;
}

async fn wait_for_ctrl_c() {
    if !signal_received(tokio::signal::ctrl_c().await) {
        std::future::pending::<()>().await;
    }
}

/// A failed Ctrl+C listener is logged and must not stop the server.
fn signal_received(result: std::io::Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            false
        }
    }
}
