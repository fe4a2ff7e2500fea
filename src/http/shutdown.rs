//! Graceful shutdown and signal handling.
//!
//! Kubernetes sends SIGTERM before removing a replica from rotation, so the
//! drain window here must stay within terminationGracePeriodSeconds in the
//! deployment manifest.

use std::time::Duration;

use axum_server::Handle;

/// How long to wait for open connections to finish after a shutdown signal.
const SHUTDOWN_DRAIN_SECS: u64 = 30;

/// Setup graceful shutdown on SIGTERM and SIGINT.
///
/// When either signal is received, the server stops accepting new
/// connections, waits for existing ones to complete, and exits.
pub fn setup_shutdown_handler(handle: Handle) {
    tokio::spawn(async move {
        let ctrl_c = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install Ctrl+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("Failed to install SIGTERM handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                tracing::info!("Received Ctrl+C, initiating graceful shutdown");
            }
            _ = terminate => {
                tracing::info!("Received SIGTERM, initiating graceful shutdown");
            }
        }

        handle.graceful_shutdown(Some(Duration::from_secs(SHUTDOWN_DRAIN_SECS)));
        tracing::info!(
            drain_secs = SHUTDOWN_DRAIN_SECS,
            "Waiting for open connections to close"
        );
    });
}
