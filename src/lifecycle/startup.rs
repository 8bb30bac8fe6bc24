//! Startup orchestration.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::ApiConfig;
use crate::http::HttpServer;
use crate::lifecycle::{signals::wait_for_signal, Shutdown};
use crate::observability::metrics;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("invalid metrics address '{0}'")]
    MetricsAddress(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Bind, serve, and return once a signal has drained the server.
pub async fn start(config: ApiConfig) -> Result<(), StartupError> {
    tracing::info!(
        bind_address = %config.listener.bind_address,
        output_dir = %config.sheet.output_dir,
        pace_ms = config.sheet.pace_ms,
        serialize_writes = config.sheet.serialize_writes,
        atomic_replace = config.sheet.atomic_replace,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config
            .observability
            .metrics_address
            .parse()
            .map_err(|_| StartupError::MetricsAddress(config.observability.metrics_address.clone()))?;
        metrics::init_metrics(addr);
    }

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            addr: config.listener.bind_address.clone(),
            source,
        })?;

    let shutdown = Shutdown::new();
    let trigger = shutdown.clone();
    tokio::spawn(async move {
        wait_for_signal().await;
        trigger.trigger();
    });

    HttpServer::new(config).run(listener, shutdown).await?;
    Ok(())
}
