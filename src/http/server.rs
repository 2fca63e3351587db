//! HTTP server startup logic.

use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::{AppConfig, ConfigError, GRACEFUL_SHUTDOWN_TIMEOUT_SECS};

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    InvalidAddress(#[from] ConfigError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Start the HTTP server based on configuration.
///
/// This function blocks until the server shuts down after SIGTERM or SIGINT.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = config.socket_addr()?;
    let listener = bind(addr).await?;
    serve(
        listener,
        app,
        shutdown::shutdown_signal(),
        Duration::from_secs(GRACEFUL_SHUTDOWN_TIMEOUT_SECS),
    )
    .await
}

/// Bind the listening socket.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve `app` on an already bound listener until `shutdown` resolves.
///
/// Once `shutdown` resolves no new connections are accepted; in-flight
/// requests get `drain_timeout` to finish before the server returns anyway.
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    shutdown: F,
    drain_timeout: Duration,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "Starting HTTP server");
    }

    let (triggered_tx, triggered_rx) = tokio::sync::oneshot::channel::<()>();
    let signal = async move {
        shutdown.await;
        let _ = triggered_tx.send(());
    };

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(signal)
        .into_future();

    let drain_deadline = async move {
        match triggered_rx.await {
            Ok(()) => tokio::time::sleep(drain_timeout).await,
            Err(_) => std::future::pending::<()>().await,
        }
    };

    tokio::select! {
        result = server => {
            result.map_err(ServerError::Serve)?;
            tracing::info!("HTTP server stopped");
            Ok(())
        }
        _ = drain_deadline => {
            tracing::warn!(
                timeout_ms = drain_timeout.as_millis() as u64,
                "Connections still open after shutdown timeout, exiting"
            );
            Ok(())
        }
    }
}
