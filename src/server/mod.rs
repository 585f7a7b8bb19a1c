//! HTTP server runtime
//!
//! Binds the listener, serves the router, and shuts down gracefully on
//! Ctrl-C or SIGTERM. In-flight requests complete before the process exits;
//! stored receipts are discarded with the process.

use crate::http::{router, AppState};
use crate::types::ReceiptError;
use std::future::Future;
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Server configuration
///
/// Controls the listen address and the number of tokio worker threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind: SocketAddr,
    /// Number of runtime worker threads
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8080)),
            workers: num_cpus::get(),
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfig with custom values
    pub fn new(bind: SocketAddr, workers: usize) -> Self {
        let default = Self::default();

        let workers = if workers == 0 {
            warn!(
                workers,
                default = default.workers,
                "invalid worker count, using default"
            );
            default.workers
        } else {
            workers
        };

        Self { bind, workers }
    }
}

/// Bind the configured address and serve until a shutdown signal arrives
pub async fn run(config: &ServerConfig) -> Result<(), ReceiptError> {
    let listener = TcpListener::bind(config.bind).await?;
    serve(listener, AppState::default(), shutdown_signal()).await
}

/// Serve the router on an already bound listener until `shutdown` resolves
pub async fn serve<F>(
    listener: TcpListener,
    state: AppState,
    shutdown: F,
) -> Result<(), ReceiptError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr()?;
    info!(bind = %local_addr, "listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("server stopped");
    Ok(())
}

/// Resolve on Ctrl-C, or SIGTERM on unix
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl-C, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}
