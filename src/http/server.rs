//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use axum_server::Handle;

use crate::config::AppConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address '{addr}': {source}")]
    Addr {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Start the HTTP server.
///
/// This function blocks until the server shuts down. Bind failures (port in
/// use, permission denied) are propagated to the caller.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let raw_addr = format!("{}:{}", config.http.host, config.http.port);
    let addr: SocketAddr = raw_addr
        .parse()
        .map_err(|source| ServerError::Addr {
            addr: raw_addr,
            source,
        })?;

    let handle = Handle::new();

    // Setup graceful shutdown
    shutdown::setup_shutdown_handler(handle.clone());

    tracing::info!(%addr, "Starting HTTP server");

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
