//! Departure board HTTP server
//!
//! Main entry point for the API server.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use axum::http::{HeaderValue, Method};
use integration_tfnsw::{DepartureClient, HttpDepartureClient};
use presentation_http::{
    AppConfig, AppState, routes,
    shutdown::{self, Drain},
};
use tokio::{net::TcpListener, signal, sync::oneshot};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "departure_board_server=debug,presentation_http=debug,integration_tfnsw=debug,tower_http=debug"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Departure board v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load().inspect_err(|e| error!("{e}"))?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        upstream = %config.tfnsw.base_url,
        timeout_secs = config.tfnsw.timeout_secs,
        "Configuration loaded"
    );

    let client: Arc<dyn DepartureClient> = Arc::new(
        HttpDepartureClient::new(&config.tfnsw).context("Failed to initialize upstream client")?,
    );

    let state = AppState::new(client, config.tfnsw.search_max_results);

    let cors_layer = if config.server.allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET])
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET])
            .allow_headers(Any)
    };

    let app = routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer);

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));
    let (signalled_tx, signalled_rx) = oneshot::channel();

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            info!("Waiting up to {:?} for connections to close...", shutdown_timeout);
            let _ = signalled_tx.send(());
        })
        .into_future();

    match shutdown::drain(server, signalled_rx, shutdown_timeout).await? {
        Drain::Complete => info!("Server shutdown complete"),
        Drain::TimedOut => warn!("Graceful shutdown timed out, dropping open connections"),
    }

    Ok(())
}

/// Wait for SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
