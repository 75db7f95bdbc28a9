//! HTTP server startup logic.
//!
//! Lifecycle: construct the router, bind the listening socket, emit the
//! startup message, serve until the process is terminated externally.
//! There is no in-process shutdown path.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server: {0}")]
    Bind(std::io::Error),

    #[error("Server error: {0}")]
    Serve(std::io::Error),
}

/// Bind the listening socket and serve the router.
///
/// Logs the one startup message once the socket is bound. A failed bind
/// (port already in use) is fatal and returned to the caller; otherwise
/// this function blocks for the life of the process.
pub async fn start_server(app: Router, addr: SocketAddr) -> Result<(), ServerError> {
    let listener = TcpListener::bind(addr).await.map_err(ServerError::Bind)?;
    tracing::info!("App listening at http://{}", addr);

    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
